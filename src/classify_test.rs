use super::*;
use crate::constants::param;

fn any_origin_config() -> FilterConfig {
    FilterConfig::default()
}

fn listed_origin_config() -> FilterConfig {
    FilterConfig::from_params([(param::ALLOWED_ORIGINS, "http://allowed.com")])
}

mod pass_through {
    use super::*;

    #[test]
    fn when_origin_header_missing_should_pass_through() {
        // Arrange
        let request = RequestContext {
            method: method::GET,
            ..RequestContext::default()
        };

        // Act
        let outcome = classify(&request, &any_origin_config());

        // Assert
        assert_eq!(outcome, Classification::PassThrough);
    }

    #[test]
    fn when_websocket_upgrade_should_pass_through_even_with_origin() {
        // Arrange
        let request = RequestContext {
            method: method::GET,
            origin: Some("http://allowed.com"),
            connection: &["Upgrade"],
            upgrade: &["WebSocket"],
            ..RequestContext::default()
        };

        // Act
        let outcome = classify(&request, &listed_origin_config());

        // Assert
        assert_eq!(outcome, Classification::PassThrough);
    }

    #[test]
    fn when_origin_is_not_allowed_should_pass_through() {
        // Arrange
        let request = RequestContext {
            method: method::GET,
            origin: Some("http://denied.com"),
            ..RequestContext::default()
        };

        // Act
        let outcome = classify(&request, &listed_origin_config());

        // Assert
        assert_eq!(outcome, Classification::PassThrough);
    }
}

mod preflight {
    use super::*;

    #[test]
    fn when_options_with_request_method_header_should_classify_preflight() {
        // Arrange
        let request = RequestContext {
            method: method::OPTIONS,
            origin: Some("http://allowed.com"),
            access_control_request_method: Some(method::POST),
            ..RequestContext::default()
        };

        // Act
        let outcome = classify(&request, &listed_origin_config());

        // Assert
        assert_eq!(
            outcome,
            Classification::Preflight {
                origin: "http://allowed.com"
            }
        );
    }

    #[test]
    fn when_method_is_options_in_lowercase_should_still_classify_preflight() {
        // Arrange
        let request = RequestContext {
            method: "options",
            origin: Some("http://x.com"),
            access_control_request_method: Some(method::GET),
            ..RequestContext::default()
        };

        // Act
        let outcome = classify(&request, &any_origin_config());

        // Assert
        assert!(matches!(outcome, Classification::Preflight { .. }));
    }

    #[test]
    fn when_options_without_request_method_header_should_not_classify_preflight() {
        // Arrange
        let request = RequestContext {
            method: method::OPTIONS,
            origin: Some("http://x.com"),
            ..RequestContext::default()
        };

        // Act
        let outcome = classify(&request, &any_origin_config());

        // Assert
        assert_eq!(outcome, Classification::Simple { origin: "http://x.com" });
    }
}

mod simple_or_actual {
    use super::*;

    #[test]
    fn when_simple_method_without_indicator_header_should_classify_simple() {
        // Arrange
        let request = RequestContext {
            method: method::POST,
            origin: Some("http://x.com"),
            ..RequestContext::default()
        };

        // Act
        let outcome = classify(&request, &any_origin_config());

        // Assert
        assert_eq!(outcome, Classification::Simple { origin: "http://x.com" });
    }

    #[test]
    fn when_non_simple_method_should_classify_like_simple() {
        // PUT/DELETE fall into the "other" bucket but emit the same headers.
        let request = RequestContext {
            method: method::DELETE,
            origin: Some("http://x.com"),
            ..RequestContext::default()
        };

        let outcome = classify(&request, &any_origin_config());

        assert_eq!(outcome, Classification::Simple { origin: "http://x.com" });
    }

    #[test]
    fn when_simple_method_carries_indicator_header_should_classify_like_simple() {
        // Arrange
        let request = RequestContext {
            method: method::GET,
            origin: Some("http://x.com"),
            access_control_request_method: Some(method::GET),
            ..RequestContext::default()
        };

        // Act
        let outcome = classify(&request, &any_origin_config());

        // Assert
        assert_eq!(outcome, Classification::Simple { origin: "http://x.com" });
    }
}
