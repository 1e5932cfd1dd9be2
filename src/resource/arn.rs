//! Resource identifier parsing

/// An identifier that does not have the `arn:partition:service:region:...` shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed resource identifier {0:?}: expected arn:partition:service:region:account:resource")]
pub struct MalformedArn(pub String);

/// Region segment of an ARN (fourth colon-delimited field)
///
/// The segment is returned as-is, so global resources such as
/// `arn:aws:iam::123456789012:role/x` yield an empty string.
pub fn region_from_arn(arn: &str) -> Result<&str, MalformedArn> {
    arn.split(':')
        .nth(3)
        .ok_or_else(|| MalformedArn(arn.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_is_fourth_field() {
        let arn = "arn:aws:sagemaker:eu-west-1:123456789012:notebook-instance/foo";
        assert_eq!(region_from_arn(arn), Ok("eu-west-1"));
    }

    #[test]
    fn test_short_identifier_is_rejected() {
        assert_eq!(
            region_from_arn("arn:aws:sagemaker"),
            Err(MalformedArn("arn:aws:sagemaker".to_string()))
        );
        assert!(region_from_arn("").is_err());
    }

    #[test]
    fn test_global_resource_has_empty_region() {
        assert_eq!(region_from_arn("arn:aws:iam::123456789012:role/x"), Ok(""));
    }

    #[test]
    fn test_exactly_four_fields_is_enough() {
        assert_eq!(region_from_arn("arn:aws:sagemaker:us-east-2"), Ok("us-east-2"));
    }
}
