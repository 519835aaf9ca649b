//! Name derivation for generated artifacts.
//!
//! A user-supplied base name such as `Card/CardItem` is turned into every
//! form the templates and the path builder need: the capitalized class
//! name, the directory/file split and the module path used by imports in
//! test files.
//!
//! ## Derived forms
//!
//! | Input       | Kind      | Class          | File path              | Module path            |
//! |-------------|-----------|----------------|------------------------|------------------------|
//! | `Test`      | store     | `TestStore`    | `TestStore.js`         | `stores/TestStore`     |
//! | `card`      | component | `Card`         | `Card.js`              | `components/Card`      |
//! | `Foo/Bar`   | component | `Bar`          | `Foo/Bar.js`           | `components/Foo/Bar`   |
//!
//! All derived forms are computed once in [`DerivedNames::derive`] so that a
//! source file and its test can never disagree on a name.

use crate::domain::error::DomainError;

/// Uppercase the first character, leave the remainder unchanged.
///
/// Idempotent, and never returns an empty string for a non-empty input.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Camelize on `-`, `_` and whitespace, then capitalize.
///
/// `temp-test` → `TempTest`, `my_app` → `MyApp`, `fooBar` → `FooBar`.
pub fn capitalize_file(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;

    for c in name.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Convert a string to kebab-case.
///
/// `CardListItem` → `card-list-item`, `HTTPServer` → `http-server`.
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Split a string into lowercase words on separators and case transitions.
///
/// 1. **Explicit separators:** `_`, `-`, whitespace → always split
/// 2. **Case transition (camelCase):** `aB` → split between `a` and `B`
/// 3. **Acronym boundary:** `HTTPServer` → split between `P` and `S`
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

/// Reject names no template can be rendered from.
///
/// Runs before any derived computation. Directory segments may be any
/// whitespace-free path component; the last segment becomes a class name
/// and must be a JavaScript identifier.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::invalid_name(name, "name cannot be empty"));
    }
    if name.contains('\\') {
        return Err(DomainError::invalid_name(
            name,
            "use '/' to separate sub-paths",
        ));
    }
    if name.starts_with('/') || name.ends_with('/') {
        return Err(DomainError::invalid_name(
            name,
            "name cannot start or end with '/'",
        ));
    }

    let segments: Vec<&str> = name.split('/').collect();
    for segment in &segments {
        if segment.is_empty() {
            return Err(DomainError::invalid_name(name, "empty path segment"));
        }
        if *segment == "." || *segment == ".." {
            return Err(DomainError::invalid_name(
                name,
                "relative segments ('.', '..') are not allowed",
            ));
        }
        if segment.chars().any(char::is_whitespace) {
            return Err(DomainError::invalid_name(name, "name cannot contain whitespace"));
        }
    }

    // `segments` is non-empty: `split` always yields at least one item.
    let file = segments[segments.len() - 1];
    if !is_js_identifier(file) {
        return Err(DomainError::invalid_name(
            name,
            format!("'{file}' is not a valid JavaScript identifier"),
        ));
    }

    Ok(())
}

pub fn is_js_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Check an `app-name` value.
///
/// The name is camelized into the dispatcher and `index.html` title, so
/// it must not contain path separators and its [`capitalize_file`] form
/// must be a JavaScript identifier (`temp-test` → `TempTest`).
pub fn validate_app_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("'app-name' cannot be empty".into()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("'app-name' cannot contain path separators".into()));
    }
    let camelized = capitalize_file(name);
    if !is_js_identifier(&camelized) {
        return Err(invalid(format!(
            "'app-name' must camelize to a JavaScript identifier ('{camelized}' is not one)"
        )));
    }
    Ok(())
}

/// Check a directory that is joined onto the project root (`appPath`,
/// `--subdir`): relative, `/`-separated, no `.` or `..` segments.
pub fn validate_relative_dir(dir: &str) -> Result<(), DomainError> {
    let outside = || DomainError::PathOutsideProject {
        path: dir.to_string(),
    };

    if dir.starts_with('/') || dir.contains('\\') || dir.contains(':') {
        return Err(outside());
    }
    if dir
        .split('/')
        .any(|segment| segment == "." || segment == "..")
    {
        return Err(outside());
    }
    Ok(())
}

/// Directory/file split of a base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSlug {
    /// Leading path segments joined with `/`, if any.
    pub directory: Option<String>,
    /// Last path segment, unchanged.
    pub file: String,
}

impl FileSlug {
    /// Segments of the directory part, outermost first.
    pub fn directory_segments(&self) -> impl Iterator<Item = &str> {
        self.directory.as_deref().into_iter().flat_map(|d| d.split('/'))
    }
}

/// Split a name into directory and file parts.
///
/// A single segment is returned unchanged as the file; `Foo/Bar` yields
/// directory `Foo` and file `Bar`.
pub fn file_slug(name: &str) -> FileSlug {
    match name.rsplit_once('/') {
        Some((dir, file)) => FileSlug {
            directory: Some(dir.to_string()),
            file: file.to_string(),
        },
        None => FileSlug {
            directory: None,
            file: name.to_string(),
        },
    }
}

/// Import-style reference used by generated test files, e.g.
/// `components/Foo/Bar` or `stores/TestStore`.
pub fn module_path(subdirectory: &str, directory: Option<&str>, file: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3);
    if !subdirectory.is_empty() {
        parts.push(subdirectory.trim_matches('/'));
    }
    if let Some(dir) = directory {
        parts.push(dir);
    }
    parts.push(file);
    parts.join("/")
}

/// How the class name of an artifact is formed from its base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityNaming {
    /// `capitalize(file) + suffix`; the suffix may be empty.
    Suffixed(&'static str),
    /// A name computed elsewhere (the dispatcher's config-derived name).
    Fixed(String),
}

/// Every name form needed to render and place one artifact.
///
/// Computed once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// The base name exactly as requested.
    pub raw: String,
    /// `capitalize(raw)`.
    pub capitalized: String,
    /// Directory part of the request plus the final file name (without
    /// extension); the file name equals `class_name`.
    pub slug: FileSlug,
    /// Import path used by tests (`<subdir>/<dir>/<File>`).
    pub module_path: String,
    /// Exported symbol of the source file.
    pub class_name: String,
}

impl DerivedNames {
    /// Validate `base_name` and derive all forms.
    ///
    /// # Errors
    ///
    /// `InvalidName` for empty, whitespace-only or malformed names.
    pub fn derive(
        base_name: &str,
        subdirectory: &str,
        naming: &EntityNaming,
    ) -> Result<Self, DomainError> {
        validate_name(base_name)?;

        let raw_slug = file_slug(base_name);
        let class_name = match naming {
            EntityNaming::Suffixed(suffix) => format!("{}{suffix}", capitalize(&raw_slug.file)),
            EntityNaming::Fixed(name) => name.clone(),
        };

        let slug = FileSlug {
            directory: raw_slug.directory,
            file: class_name.clone(),
        };
        let module_path = module_path(subdirectory, slug.directory.as_deref(), &slug.file);

        Ok(Self {
            raw: base_name.to_string(),
            capitalized: capitalize(base_name),
            slug,
            module_path,
            class_name,
        })
    }

    /// CSS class used by style assets and component markup.
    pub fn style_class(&self) -> String {
        to_kebab_case(&self.class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_uppercases_first_letter_only() {
        assert_eq!(capitalize("foo"), "Foo");
        assert_eq!(capitalize("fooBar"), "FooBar");
        assert_eq!(capitalize("FOO"), "FOO");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn capitalize_is_idempotent_and_non_empty() {
        for name in ["a", "test", "Test", "x9", "$el", "_private", "Foo/Bar"] {
            let once = capitalize(name);
            assert!(!once.is_empty());
            assert_eq!(capitalize(&once), once, "not idempotent for {name}");
        }
    }

    #[test]
    fn capitalize_file_camelizes_separators() {
        assert_eq!(capitalize_file("temp-test"), "TempTest");
        assert_eq!(capitalize_file("my_app"), "MyApp");
        assert_eq!(capitalize_file("my awesome app"), "MyAwesomeApp");
        assert_eq!(capitalize_file("fooBar"), "FooBar");
    }

    #[test]
    fn kebab_case_splits_case_transitions() {
        assert_eq!(to_kebab_case("CardListItem"), "card-list-item");
        assert_eq!(to_kebab_case("HTTPServer"), "http-server");
        assert_eq!(to_kebab_case("Bar"), "bar");
    }

    #[test]
    fn empty_and_blank_names_are_rejected() {
        for name in ["", "   ", "\t"] {
            assert!(matches!(
                validate_name(name),
                Err(DomainError::InvalidName { .. })
            ));
        }
    }

    #[test]
    fn malformed_paths_are_rejected() {
        for name in ["/Foo", "Foo/", "Foo//Bar", "../Foo", "Foo\\Bar", "Foo Bar", "9Lives", "my-card"] {
            assert!(validate_name(name).is_err(), "accepted {name:?}");
        }
    }

    #[test]
    fn directory_segments_may_use_hyphens() {
        assert!(validate_name("card-list/CardItem").is_ok());
    }

    #[test]
    fn single_segment_slug_is_unchanged() {
        let slug = file_slug("Foo");
        assert_eq!(slug.directory, None);
        assert_eq!(slug.file, "Foo");
    }

    #[test]
    fn nested_slug_splits_directory_and_file() {
        let slug = file_slug("Foo/Bar");
        assert_eq!(slug.directory.as_deref(), Some("Foo"));
        assert_eq!(slug.file, "Bar");

        let deep = file_slug("a/b/Card");
        assert_eq!(deep.directory.as_deref(), Some("a/b"));
        assert_eq!(deep.directory_segments().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn module_path_joins_subdirectory() {
        assert_eq!(module_path("components", None, "Foo"), "components/Foo");
        assert_eq!(
            module_path("components", Some("Foo"), "Bar"),
            "components/Foo/Bar"
        );
        assert_eq!(module_path("", None, "Foo"), "Foo");
    }

    #[test]
    fn derive_store_names() {
        let names =
            DerivedNames::derive("Test", "stores", &EntityNaming::Suffixed("Store")).unwrap();
        assert_eq!(names.class_name, "TestStore");
        assert_eq!(names.module_path, "stores/TestStore");
        assert_eq!(names.slug.file, "TestStore");
    }

    #[test]
    fn derive_sub_path_component_uses_last_segment() {
        let names =
            DerivedNames::derive("Foo/Bar", "components", &EntityNaming::Suffixed("")).unwrap();
        assert_eq!(names.class_name, "Bar");
        assert_eq!(names.slug.directory.as_deref(), Some("Foo"));
        assert_eq!(names.module_path, "components/Foo/Bar");
        assert_eq!(names.capitalized, "Foo/Bar");
    }

    #[test]
    fn derive_lowercase_name_capitalizes_class() {
        let names =
            DerivedNames::derive("card", "components", &EntityNaming::Suffixed("")).unwrap();
        assert_eq!(names.raw, "card");
        assert_eq!(names.class_name, "Card");
        assert_eq!(names.module_path, "components/Card");
    }

    #[test]
    fn derive_fixed_name_overrides_base() {
        let naming = EntityNaming::Fixed("TempTestAppDispatcher".into());
        let names = DerivedNames::derive("temp-test", "dispatcher", &naming);
        // the app name is not an identifier, but a fixed name never comes from it
        assert!(names.is_err());

        let names = DerivedNames::derive("Dispatcher", "dispatcher", &naming).unwrap();
        assert_eq!(names.class_name, "TempTestAppDispatcher");
        assert_eq!(names.module_path, "dispatcher/TempTestAppDispatcher");
    }

    #[test]
    fn app_name_must_camelize_to_identifier() {
        assert!(validate_app_name("temp-test").is_ok());
        assert!(validate_app_name("my_app").is_ok());

        for bad in ["", "  ", "foo/bar", "2048-clone", "--", "a.b"] {
            let err = validate_app_name(bad).unwrap_err();
            let DomainError::InvalidName { reason, .. } = err else {
                panic!("{bad}: expected InvalidName, got {err:?}");
            };
            assert!(reason.contains("app-name"), "{bad}: {reason}");
        }
    }

    #[test]
    fn relative_dirs_stay_inside_the_project() {
        for ok in ["src", "app/client", "flux", "src/"] {
            assert!(validate_relative_dir(ok).is_ok(), "{ok}");
        }
        for bad in ["..", "../../elsewhere", "src/../..", "/etc", "./src", "C:\\app", "a\\b"] {
            assert!(
                matches!(
                    validate_relative_dir(bad),
                    Err(DomainError::PathOutsideProject { .. })
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn derive_validates_before_computing() {
        let err = DerivedNames::derive("  ", "stores", &EntityNaming::Suffixed("Store"));
        assert!(matches!(err, Err(DomainError::InvalidName { .. })));
    }

    #[test]
    fn style_class_is_kebab_case() {
        let names =
            DerivedNames::derive("CardListItem", "components", &EntityNaming::Suffixed(""))
                .unwrap();
        assert_eq!(names.style_class(), "card-list-item");
    }
}
