pub mod auth;
pub mod config;
pub mod curl;
pub mod description;
pub mod helpers;
pub mod models;
pub mod statement;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    use crate::auth;
    use crate::curl;
    use crate::models::{
        AuthFragment, DescribedBy, MethodDescriptor, Parameter, SchemeRef, SecurityScheme,
    };

    fn scheme(name: &str, type_: &str, headers: Vec<&str>, query: Vec<&str>) -> SecurityScheme {
        let params = |names: Vec<&str>| -> Vec<Parameter> {
            names
                .into_iter()
                .map(|n| Parameter {
                    name: n.to_string(),
                    type_: "string".to_string(),
                    key: None,
                    examples: Vec::new(),
                })
                .collect()
        };
        SecurityScheme {
            name: name.to_string(),
            type_: type_.to_string(),
            describedBy: Some(DescribedBy {
                headers: params(headers),
                queryParameters: params(query),
            }),
            settings: None,
        }
    }

    fn all_schemes() -> HashMap<String, SecurityScheme> {
        [
            scheme("oauth2", "OAuth 2.0", vec!["Authorization"], vec!["access_token"]),
            scheme("oauth1", "OAuth 1.0", vec![], vec![]),
            scheme("basicAuth", "Basic Authentication", vec![], vec![]),
            scheme("digestAuth", "Digest Authentication", vec![], vec![]),
            scheme("passThrough", "Pass Through", vec!["X-Auth"], vec!["auth_token"]),
            scheme("customAuth", "x-custom", vec!["X-API-Key"], vec![]),
            scheme("hawk", "Hawk", vec!["X-Hawk"], vec![]),
        ]
        .into_iter()
        .map(|s| (s.name.clone(), s))
        .collect()
    }

    fn secured_get(names: &[Option<&str>]) -> MethodDescriptor {
        MethodDescriptor {
            method: "get".to_string(),
            baseUri: "https://api.example.com".to_string(),
            path: "/items".to_string(),
            securedBy: names
                .iter()
                .map(|n| {
                    n.map(|name| SchemeRef {
                        schemeName: name.to_string(),
                    })
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_scheme_yields_at_least_one_fragment() {
        for scheme in all_schemes().values() {
            assert!(!auth::compile(scheme).is_empty(), "{}", scheme.name);
        }
    }

    #[test]
    fn test_command_count_matches_fragment_count() {
        let schemes = all_schemes();
        let method = secured_get(&[
            Some("oauth2"),
            None,
            Some("oauth1"),
            Some("basicAuth"),
            Some("hawk"),
            Some("missing"),
        ]);

        // oauth2: 2, null: 1, oauth1: 2, basic: 1, unknown type: 1, undefined: dropped
        let commands = curl::for_method(&method, Some(&schemes));
        assert_eq!(commands.len(), 7);
        assert_eq!(commands[0], "curl -X GET \"https://api.example.com/items\" \\\n\t-H \"Authorization: Bearer string\"");
        assert_eq!(commands[1], "curl -X GET \"https://api.example.com/items?access_token=string\"");
        assert_eq!(commands[2], "curl -X GET \"https://api.example.com/items\"");
        assert_eq!(commands[5], "curl -X GET \"https://api.example.com/items\" \\\n\t--user username:password");
        assert_eq!(commands[6], "curl -X GET \"https://api.example.com/items\"");
    }

    #[test]
    fn test_oauth1_alternatives_do_not_mix() {
        let schemes = all_schemes();
        let commands = curl::for_method(&secured_get(&[Some("oauth1")]), Some(&schemes));
        assert_eq!(commands.len(), 2);

        let (header_command, query_command) = (&commands[0], &commands[1]);
        assert!(header_command.contains("oauth_signature_method=\"RSA-SHA1\""));
        assert!(!header_command.contains('?'));
        assert!(query_command.contains("?oauth_consumer_key=consumer_key&"));
        assert!(!query_command.contains("-H"));
    }

    #[test]
    fn test_unsecured_method_has_no_extras() {
        let method = MethodDescriptor {
            method: "delete".to_string(),
            baseUri: "https://api.example.com".to_string(),
            path: "/items/1".to_string(),
            headers: vec!["-H \"Accept: application/json\"".to_string()],
            ..Default::default()
        };
        let expected =
            vec!["curl -X DELETE \"https://api.example.com/items/1\" \\\n\t-H \"Accept: application/json\"".to_string()];

        assert_eq!(curl::for_method(&method, None), expected);
        assert_eq!(curl::for_method(&method, Some(&all_schemes())), expected);
        assert_eq!(curl::build_commands(&method, &[]), expected);
        assert_eq!(curl::build_commands(&method, &[AuthFragment::default()]), expected);
    }

    #[test]
    fn test_pass_through_and_custom_preserve_all_headers() {
        let schemes = all_schemes();
        let commands = curl::for_method(
            &secured_get(&[Some("passThrough"), Some("customAuth")]),
            Some(&schemes),
        );
        assert_eq!(
            commands,
            vec![
                "curl -X GET \"https://api.example.com/items?auth_token=string\" \\\n\t-H \"X-Auth: string\"".to_string(),
                "curl -X GET \"https://api.example.com/items\" \\\n\t-H \"X-API-Key: string\"".to_string(),
            ]
        );
    }
}
