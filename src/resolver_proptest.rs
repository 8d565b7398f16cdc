//! Property-based tests for name derivation and version extraction.

#[cfg(test)]
mod proptest_tests {
    use crate::manifest::DependencyDeclaration;
    use crate::registry::PrivateRepositoryDeclaration;
    use crate::resolver::{repository_name, VersionResolver};
    use proptest::prelude::*;

    proptest! {
        /// Property: a trailing `.git` never changes the derived name
        #[test]
        fn name_ignores_git_suffix(
            host in "[a-z]{1,10}\\.com",
            group in "[a-z0-9-]{1,10}",
            name in "[a-zA-Z0-9_-]{1,20}",
        ) {
            let plain = format!("https://{}/{}/{}", host, group, name);
            let with_suffix = format!("{}.git", plain);
            prop_assert_eq!(repository_name(&plain), Some(name.as_str()));
            prop_assert_eq!(repository_name(&with_suffix), Some(name.as_str()));
        }

        /// Property: the derived name never contains a slash
        #[test]
        fn name_has_no_slash(url in ".*") {
            if let Some(name) = repository_name(&url) {
                prop_assert!(!name.contains('/'));
                prop_assert!(!name.is_empty());
            }
        }

        /// Property: the version is the `v` token after the module path,
        /// regardless of a trailing comment
        #[test]
        fn version_is_last_v_token(
            path in "[a-z]{1,8}\\.com/[a-z]{1,8}/[a-z]{1,8}",
            major in 0u32..100,
            minor in 0u32..100,
            patch in 0u32..100,
            indirect in any::<bool>(),
        ) {
            let version = format!("v{}.{}.{}", major, minor, patch);
            let line = if indirect {
                format!("{} {} // indirect", path, version)
            } else {
                format!("{} {}", path, version)
            };
            let resolver = VersionResolver::new().unwrap();
            prop_assert_eq!(resolver.extract_version(&line).unwrap(), version);
        }

        /// Property: resolution keeps declaration order and length
        #[test]
        fn resolve_preserves_order(names in prop::collection::vec("[a-z]{3,8}", 1..6)) {
            let manifest: Vec<_> = names
                .iter()
                .map(|n| DependencyDeclaration::new(format!("\tgit.example.com/{} v1.0.0", n)))
                .collect();
            let repos: Vec<_> = names
                .iter()
                .rev()
                .map(|n| PrivateRepositoryDeclaration {
                    url: format!("https://git.example.com/{}.git", n),
                    main_branch: "main".to_string(),
                })
                .collect();

            let resolver = VersionResolver::new().unwrap();
            let modules = resolver.resolve(&repos, &manifest).unwrap();
            prop_assert_eq!(modules.len(), repos.len());
            for (module, repo) in modules.iter().zip(&repos) {
                prop_assert_eq!(&module.url, &repo.url);
            }
        }
    }
}
