//! Choosing which catalog fonts to install.

use log::debug;

use crate::{
    catalog::{Catalog, FontEntry},
    config::FONT_EXTENSION,
    error::Result,
    prompt::Prompt,
};

pub const CONFIRM_ALL_MESSAGE: &str = "Copy all fonts?";
pub const MULTI_SELECT_MESSAGE: &str = "Select fonts to copy:";

/// Fonts chosen for this run plus requested names that matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub selected: Vec<FontEntry>,
    pub not_found: Vec<String>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Turn a command-line font name (`Open+Sans`) into a file name (`Open Sans.woff2`).
pub fn decode_font_arg(arg: &str) -> String {
    format!("{}.{FONT_EXTENSION}", arg.replace('+', " "))
}

/// Match command-line names against the catalog.
///
/// The selection keeps catalog order. Unmatched names are reported in
/// request order with the extension appended.
pub fn resolve_args<S: AsRef<str>>(catalog: &Catalog, args: &[S]) -> Resolution {
    let requested: Vec<String> = args.iter().map(|a| decode_font_arg(a.as_ref())).collect();

    let selected = catalog
        .entries()
        .iter()
        .filter(|entry| requested.iter().any(|r| r == entry.file_name()))
        .cloned()
        .collect();

    let not_found = requested.into_iter().filter(|r| !catalog.contains(r)).collect();

    Resolution { selected, not_found }
}

/// Ask the user: everything, or a hand-picked subset.
pub fn resolve_interactive(catalog: &Catalog, prompt: &mut impl Prompt) -> Result<Resolution> {
    if prompt.confirm(CONFIRM_ALL_MESSAGE, true)? {
        return Ok(Resolution { selected: catalog.entries().to_vec(), not_found: Vec::new() });
    }

    let options: Vec<String> = catalog.entries().iter().map(|e| e.file_name().to_owned()).collect();
    let chosen = prompt.multi_select(MULTI_SELECT_MESSAGE, &options)?;
    debug!("User selected {} of {} fonts", chosen.len(), options.len());

    let selected = chosen.iter().filter_map(|name| catalog.get(name)).cloned().collect();
    Ok(Resolution { selected, not_found: Vec::new() })
}

/// Argument mode when `args` is non-empty, interactive mode otherwise.
pub fn resolve<S: AsRef<str>>(
    catalog: &Catalog,
    args: &[S],
    prompt: &mut impl Prompt,
) -> Result<Resolution> {
    if args.is_empty() {
        resolve_interactive(catalog, prompt)
    } else {
        Ok(resolve_args(catalog, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Canned {
        confirm: bool,
        pick: Vec<&'static str>,
        asked: Vec<String>,
    }

    impl Prompt for Canned {
        fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
            assert!(default);
            self.asked.push(message.to_string());
            Ok(self.confirm)
        }

        fn multi_select(&mut self, message: &str, _options: &[String]) -> Result<Vec<String>> {
            self.asked.push(message.to_string());
            Ok(self.pick.iter().map(|s| s.to_string()).collect())
        }
    }

    struct Unreachable;

    impl Prompt for Unreachable {
        fn confirm(&mut self, _: &str, _: bool) -> Result<bool> {
            Err(Error::Prompt("confirm should not run".into()))
        }

        fn multi_select(&mut self, _: &str, _: &[String]) -> Result<Vec<String>> {
            Err(Error::Prompt("multi_select should not run".into()))
        }
    }

    fn catalog(names: &[&str]) -> Catalog {
        Catalog::from_entries("fonts", names.iter().map(|n| FontEntry::new(*n)))
    }

    #[test]
    fn test_decode_font_arg() {
        assert_eq!(decode_font_arg("Open+Sans"), "Open Sans.woff2");
        assert_eq!(decode_font_arg("Noto+Sans+JP"), "Noto Sans JP.woff2");
        assert_eq!(decode_font_arg("Inter"), "Inter.woff2");
    }

    #[test]
    fn test_resolve_args_reports_missing() {
        let catalog = catalog(&["Open Sans.woff2", "Roboto.woff2"]);
        let res = resolve_args(&catalog, &["Open+Sans", "Nonexistent"]);
        assert_eq!(res.selected, [FontEntry::new("Open Sans.woff2")]);
        assert_eq!(res.not_found, ["Nonexistent.woff2"]);
    }

    #[test]
    fn test_resolve_args_is_case_sensitive() {
        let catalog = catalog(&["Roboto.woff2"]);
        let res = resolve_args(&catalog, &["roboto"]);
        assert!(res.is_empty());
        assert_eq!(res.not_found, ["roboto.woff2"]);
    }

    #[test]
    fn test_resolve_args_keeps_catalog_order_without_duplicates() {
        let catalog = catalog(&["A.woff2", "B.woff2", "C.woff2"]);
        let res = resolve_args(&catalog, &["C", "A", "C"]);
        assert_eq!(res.selected, [FontEntry::new("A.woff2"), FontEntry::new("C.woff2")]);
        assert!(res.not_found.is_empty());
    }

    #[test]
    fn test_resolve_with_args_skips_prompt() {
        let catalog = catalog(&["A.woff2"]);
        let res = resolve(&catalog, &["A"], &mut Unreachable).unwrap();
        assert_eq!(res.selected, [FontEntry::new("A.woff2")]);
    }

    #[test]
    fn test_interactive_copy_all() {
        let catalog = catalog(&["A.woff2", "B.woff2"]);
        let mut prompt = Canned { confirm: true, pick: vec![], asked: vec![] };
        let res = resolve::<&str>(&catalog, &[], &mut prompt).unwrap();
        assert_eq!(res.selected, catalog.entries());
        assert_eq!(prompt.asked, [CONFIRM_ALL_MESSAGE]);
    }

    #[test]
    fn test_interactive_subset() {
        let catalog = catalog(&["A.woff2", "B.woff2", "C.woff2"]);
        let mut prompt = Canned { confirm: false, pick: vec!["C.woff2", "A.woff2"], asked: vec![] };
        let res = resolve::<&str>(&catalog, &[], &mut prompt).unwrap();
        assert_eq!(res.selected, [FontEntry::new("C.woff2"), FontEntry::new("A.woff2")]);
        assert_eq!(prompt.asked, [CONFIRM_ALL_MESSAGE, MULTI_SELECT_MESSAGE]);
    }

    #[test]
    fn test_interactive_nothing_picked() {
        let catalog = catalog(&["A.woff2"]);
        let mut prompt = Canned { confirm: false, pick: vec![], asked: vec![] };
        let res = resolve::<&str>(&catalog, &[], &mut prompt).unwrap();
        assert!(res.is_empty());
    }

    #[test]
    fn test_prompt_error_propagates() {
        let catalog = catalog(&["A.woff2"]);
        let err = resolve::<&str>(&catalog, &[], &mut Unreachable).unwrap_err();
        assert!(matches!(err, Error::Prompt(_)));
    }
}
