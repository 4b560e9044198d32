use super::*;
use crate::constants::header;

mod new {
    use super::*;

    #[test]
    fn should_start_with_empty_headers_when_called() {
        // Arrange & Act
        let collection = HeaderCollection::new();

        // Assert
        assert!(collection.into_headers().is_empty());
    }
}

mod push {
    use super::*;

    #[test]
    fn should_store_value_given_new_header() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Trace");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some(&"X-Trace".to_string())
        );
    }

    #[test]
    fn should_keep_empty_value_given_empty_string() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&String::new())
        );
    }

    #[test]
    fn should_replace_in_place_given_name_differs_only_in_case() {
        // Arrange
        let mut collection = HeaderCollection::new();
        collection.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "https://a.test");
        collection.push(header::ACCESS_CONTROL_MAX_AGE, "0");

        // Act
        collection.push("access-control-allow-origin", "https://b.test");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get_index(0),
            Some((
                &header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                &"https://b.test".to_string()
            ))
        );
    }
}

mod extend {
    use super::*;

    #[test]
    fn should_append_in_order_given_disjoint_collections() {
        // Arrange
        let mut base = HeaderCollection::new();
        base.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        let mut other = HeaderCollection::with_estimate(1);
        other.push(header::ACCESS_CONTROL_ALLOW_METHODS, "GET");

        // Act
        base.extend(other);

        // Assert
        let names: Vec<_> = base.into_headers().into_keys().collect();
        assert_eq!(
            names,
            vec![
                header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                header::ACCESS_CONTROL_ALLOW_METHODS.to_string(),
            ]
        );
    }
}
