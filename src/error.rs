use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::head_object::HeadObjectError;
use aws_sdk_s3::operation::put_object::PutObjectError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Invalid command. Cause: {0}")]
	CmdInvalid(&'static str),

	#[error(transparent)]
	Clap(#[from] clap::Error),

	#[error("Object key too long ({0} bytes). S3 keys are limited to 1024 bytes")]
	KeyTooLong(usize),

	#[error("Invalid link '{0}'. Should start with 'http://', 'https://' or '/'")]
	InvalidLink(String),

	#[error("AWS Service Error. Code: {0}, Message: {1}")]
	AwsServiceError(String, String), // code, message

	#[error("AWS SDK Error. Cause: {0}")]
	AwsSdk(String),

	#[error(transparent)]
	IO(#[from] std::io::Error),
}

/// For better CLI error reporting.
impl From<SdkError<HeadObjectError>> for Error {
	fn from(val: SdkError<HeadObjectError>) -> Self {
		from_sdk_error(val)
	}
}

impl From<SdkError<PutObjectError>> for Error {
	fn from(val: SdkError<PutObjectError>) -> Self {
		from_sdk_error(val)
	}
}

fn from_sdk_error<E>(val: SdkError<E>) -> Error
where
	E: ProvideErrorMetadata + std::error::Error + 'static,
{
	match val {
		SdkError::ServiceError(ctx) => {
			let se = ctx.into_err();
			let code = se.code().unwrap_or_default().to_string();
			let message = se.message().unwrap_or_default().to_string();
			Error::AwsServiceError(code, message)
		}
		other => Error::AwsSdk(DisplayErrorContext(other).to_string()),
	}
}
