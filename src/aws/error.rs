//! Operator-facing rendering of AWS errors

/// Maximum length of an unrecognized error message shown on the console
const MAX_DISPLAY_LENGTH: usize = 120;

/// Format an AWS API error for display
///
/// Common failure classes get a short actionable message; anything else is
/// stripped of control characters and truncated. The full error belongs in
/// the log, not on the console.
pub fn format_aws_error(error: &anyhow::Error) -> String {
    let error_str = format!("{:#}", error);

    if error_str.contains("AccessDenied") || error_str.contains("not authorized") {
        return "Permission denied. Check the IAM permissions for sagemaker:List*/Describe*."
            .to_string();
    }
    if error_str.contains("ExpiredToken") {
        return "AWS credentials have expired. Refresh your session and try again.".to_string();
    }
    if error_str.contains("UnrecognizedClientException")
        || error_str.contains("InvalidClientTokenId")
        || error_str.contains("no credentials")
        || error_str.contains("NoCredentials")
    {
        return "Authentication failed. Configure AWS credentials for this account.".to_string();
    }
    if error_str.contains("Throttling") || error_str.contains("TooManyRequests") {
        return "Request was throttled by AWS. Please try again later.".to_string();
    }
    if error_str.contains("ResourceNotFound") {
        return "Resource not found.".to_string();
    }
    if error_str.contains("ValidationException") {
        return "Invalid request. Check the region and parameters.".to_string();
    }
    if error_str.contains("ServiceUnavailable") || error_str.contains("InternalFailure") {
        return "SageMaker service temporarily unavailable. Please try again.".to_string();
    }
    if error_str.contains("dispatch failure") {
        return "Request failed. Check your network connection and the region name.".to_string();
    }

    let sanitized = error_str
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .take(MAX_DISPLAY_LENGTH)
        .collect::<String>();

    if error_str.chars().count() > MAX_DISPLAY_LENGTH {
        format!("{}...", sanitized)
    } else {
        sanitized
    }
}
