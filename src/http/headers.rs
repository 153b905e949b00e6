//! SDK request headers

use crate::types::StringMap;

/// Header identifying the service, version and operation of a request
pub const SDK_ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

/// Headers sent with every operation of a service
pub fn sdk_headers(service_name: &str, service_version: &str, operation_id: &str) -> StringMap {
    let mut headers = StringMap::new();
    headers.insert(
        SDK_ANALYTICS_HEADER.to_string(),
        format!(
            "service_name={service_name};service_version={service_version};operation_id={operation_id}"
        ),
    );
    headers
}

#[cfg(test)]
mod headers_tests {
    use super::*;

    #[test]
    fn test_sdk_headers() {
        let headers = sdk_headers("global_search", "V2", "Search");
        assert_eq!(
            headers.get(SDK_ANALYTICS_HEADER).map(String::as_str),
            Some("service_name=global_search;service_version=V2;operation_id=Search")
        );
    }
}
