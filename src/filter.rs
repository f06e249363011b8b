use crate::model::{AndroidDependency, AutolinkConfig};

/// Project the android descriptor out of every dependency that defines one,
/// preserving the order of the `dependencies` map.
///
/// No config, no `dependencies` map, or an empty map all yield an empty
/// sequence; a dependency without an android descriptor is skipped.
pub fn filter_android_dependencies(config: Option<&AutolinkConfig>) -> Vec<&AndroidDependency> {
    let Some(deps) = config.and_then(|c| c.dependencies.as_ref()) else {
        return Vec::new();
    };

    deps.values()
        .filter_map(|dep| dep.platforms.as_ref()?.android.as_ref())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_config(json: &str) -> AutolinkConfig {
        serde_json::from_str(json).expect("config fixture must parse")
    }

    #[test]
    fn no_config_yields_empty() {
        assert!(filter_android_dependencies(None).is_empty());
    }

    #[test]
    fn missing_dependencies_map_yields_empty() {
        let config = parse_config(r#"{"reactNativeVersion": "1000.0.0"}"#);
        assert!(filter_android_dependencies(Some(&config)).is_empty());
    }

    #[test]
    fn empty_dependencies_map_yields_empty() {
        let config = parse_config(r#"{"reactNativeVersion": "1000.0.0", "dependencies": {}}"#);
        assert!(filter_android_dependencies(Some(&config)).is_empty());
    }

    #[test]
    fn dependency_without_android_descriptor_is_skipped() {
        let config = parse_config(
            r#"{
                "reactNativeVersion": "1000.0.0",
                "dependencies": {
                    "a-dependency": {
                        "root": "./a/directory",
                        "name": "a-dependency",
                        "platforms": {"android": null}
                    }
                }
            }"#,
        );
        assert!(filter_android_dependencies(Some(&config)).is_empty());
    }

    #[test]
    fn dependency_with_android_descriptor_is_included_once() {
        let config = parse_config(
            r#"{
                "reactNativeVersion": "1000.0.0",
                "dependencies": {
                    "a-dependency": {
                        "root": "./a/directory",
                        "name": "a-dependency",
                        "platforms": {
                            "android": {
                                "sourceDir": "./a/directory/android",
                                "packageImportPath": "import com.facebook.react.aPackage;",
                                "packageInstance": "new APackage()",
                                "buildTypes": []
                            }
                        }
                    }
                }
            }"#,
        );

        let result = filter_android_dependencies(Some(&config));
        assert_eq!(result.len(), 1);

        let expected: AndroidDependency = serde_json::from_str(
            r#"{
                "sourceDir": "./a/directory/android",
                "packageImportPath": "import com.facebook.react.aPackage;",
                "packageInstance": "new APackage()",
                "buildTypes": []
            }"#,
        )
        .expect("descriptor fixture must parse");
        assert_eq!(result[0], &expected);
    }

    #[test]
    fn descriptors_come_out_in_document_order() {
        let config = parse_config(
            r#"{
                "dependencies": {
                    "second": {"platforms": {"android": {"sourceDir": "./second/android"}}},
                    "skipped": {"platforms": {"android": null}},
                    "first": {"platforms": {"android": {"sourceDir": "./first/android"}}}
                }
            }"#,
        );

        let dirs: Vec<&str> = filter_android_dependencies(Some(&config))
            .iter()
            .map(|d| d.source_dir.as_str())
            .collect();
        assert_eq!(dirs, vec!["./second/android", "./first/android"]);
    }
}
