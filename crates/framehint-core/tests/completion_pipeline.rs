mod common;

use common::{cell_request_at_cursor, people_session, TestSession};
use framehint_core::host::{install, uninstall, CompletionProvider, ProviderRegistry};
use framehint_core::{ColumnCompleter, CompletionConfig, CompletionRequest, KeywordRule};
use rstest::rstest;

#[rstest]
#[case::keyword_open_quote(r#"df.groupby(by=""#, &["Name", "FavoriteFood"])]
#[case::open_call(r#"df.groupby("#, &["Name", "FavoriteFood"])]
#[case::keyword_prefix(r#"df.groupby(by="Fa"#, &["FavoriteFood"])]
#[case::single_quote_prefix("df.groupby(by='Na", &["Name"])]
#[case::list_prefix(r#"df.groupby(by=["Name", "Fa"#, &["FavoriteFood"])]
#[case::empty_list(r#"df.drop_duplicates(subset=[""#, &["Name", "FavoriteFood"])]
#[case::positional_prefix(r#"df.sort_values("Na"#, &["Name"])]
#[case::earlier_keyword_skipped(r#"df.groupby(level=0, by="Na"#, &["Name"])]
#[case::merge_on(r#"df.merge(other, on=""#, &["Name", "FavoriteFood"])]
#[case::flag_before_subset(r#"df.drop_duplicates(inplace=True, subset=""#, &["Name", "FavoriteFood"])]
#[case::flag_before_by(r#"df.sort_values(ascending=False, by="Na"#, &["Name"])]
#[case::variable_before_on(r#"df.merge(right=other, on=""#, &["Name", "FavoriteFood"])]
#[case::negative_before_by(r#"df.groupby(level=-1, by="Fa"#, &["FavoriteFood"])]
#[case::slice("df[[", &["Name", "FavoriteFood"])]
#[case::slice_prefix(r#"df[["Fa"#, &["FavoriteFood"])]
#[case::slice_second_column(r#"df[["Name", "Fa"#, &["FavoriteFood"])]
fn completes_columns(#[case] text: &str, #[case] expected: &[&str]) {
    let completer = ColumnCompleter::new();
    assert_eq!(completer.complete_text(text, &people_session()), expected);
}

#[rstest]
#[case::closed_slice_attribute(r#"df[["test"]]."#)]
#[case::unknown_target(r#"frame.groupby(by=""#)]
#[case::unregistered_keyword(r#"df.groupby(axis=""#)]
#[case::unregistered_positional("df.head(")]
#[case::numeric_value("df.groupby(by=1")]
#[case::dict_value(r#"df.groupby(by={"a": "#)]
#[case::no_prefix_match(r#"df.groupby(by="zzz"#)]
#[case::closed_call(r#"df.groupby(by="Name")"#)]
#[case::chained_call(r#"df.groupby(by="Name").agg("#)]
#[case::plain_text("print(")]
fn completes_nothing(#[case] text: &str) {
    let completer = ColumnCompleter::new();
    assert!(completer.complete_text(text, &people_session()).is_empty());
}

#[test]
fn prefix_keeps_spaces_inside_quotes() {
    let session = TestSession::default().with_frame("df", &["Favorite Food", "Favorites", "Name"]);
    let completer = ColumnCompleter::new();

    assert_eq!(
        completer.complete_text(r#"df.groupby(by="Favorite Fo"#, &session),
        vec!["Favorite Food"]
    );
    assert_eq!(
        completer.complete_text(r#"df.sort_values(ascending=True, by='Favorite F"#, &session),
        vec!["Favorite Food"]
    );
}

#[rstest]
#[case::positional(format!("df.groupby({}", "[".repeat(200_000)))]
#[case::keyword(format!("df.groupby(by=[{}", "{".repeat(200_000)))]
fn deeply_nested_brackets_complete_nothing(#[case] text: String) {
    let completer = ColumnCompleter::new();
    assert!(completer.complete_text(&text, &people_session()).is_empty());
}

#[test]
fn completion_is_idempotent() {
    let completer = ColumnCompleter::new();
    let session = people_session();
    let text = r#"df.drop_duplicates(subset=["Name", "#;

    let first = completer.complete_text(text, &session);
    let second = completer.complete_text(text, &session);
    assert_eq!(first, second);
}

#[test]
fn resolves_target_per_frame() {
    let session = people_session().with_frame("orders", &["OrderId", "Name"]);
    let completer = ColumnCompleter::new();

    assert_eq!(
        completer.complete_text(r#"orders.groupby(by=""#, &session),
        vec!["OrderId", "Name"]
    );
    assert_eq!(
        completer.complete_text(r#"orders.merge(df, on="N"#, &session),
        vec!["Name"]
    );
}

#[test]
fn continuation_line_completes_from_cell() {
    let completer = ColumnCompleter::new();
    let request = cell_request_at_cursor("result = df.groupby(\n  by=[\"Name\",\n      \"Fa|\"])");

    assert_eq!(request.line, "      \"Fa");
    assert_eq!(completer.complete(&request, &people_session()), vec!["FavoriteFood"]);
}

#[test]
fn continuation_line_without_cell_sees_only_the_line() {
    let completer = ColumnCompleter::new();
    let request = CompletionRequest::from_line("      \"Fa");
    assert!(completer.complete(&request, &people_session()).is_empty());
}

#[test]
fn configured_keywords() {
    let config = CompletionConfig {
        keywords: vec![
            KeywordRule {
                keyword: "level".to_string(),
                function: Some("groupby".to_string()),
            },
            KeywordRule {
                keyword: "cols".to_string(),
                function: None,
            },
        ],
        disabled_keywords: vec!["subset".to_string()],
        complete_slices: false,
        ..CompletionConfig::default()
    };
    let completer = ColumnCompleter::with_config(config);
    let session = people_session();

    assert_eq!(
        completer.complete_text(r#"df.groupby(level="N"#, &session),
        vec!["Name"]
    );
    assert_eq!(
        completer.complete_text(r#"df.anything(cols="F"#, &session),
        vec!["FavoriteFood"]
    );
    assert!(completer
        .complete_text(r#"df.drop_duplicates(subset=""#, &session)
        .is_empty());
    assert!(completer.complete_text("df[[", &session).is_empty());
}

#[derive(Default)]
struct Chain {
    providers: Vec<Box<dyn CompletionProvider>>,
    merge: bool,
}

impl ProviderRegistry for Chain {
    fn insert_first(&mut self, provider: Box<dyn CompletionProvider>) {
        self.providers.insert(0, provider);
    }

    fn remove(&mut self, id: &str) -> Option<Box<dyn CompletionProvider>> {
        let idx = self.providers.iter().position(|p| p.id() == id)?;
        Some(self.providers.remove(idx))
    }

    fn merge_results(&self) -> bool {
        self.merge
    }

    fn set_merge_results(&mut self, merge: bool) {
        self.merge = merge;
    }
}

impl Chain {
    fn first_completion(&self, request: &CompletionRequest, session: &TestSession) -> Vec<String> {
        self.providers
            .iter()
            .map(|p| p.complete(request, session))
            .find(|suggestions| !suggestions.is_empty())
            .unwrap_or_default()
    }
}

#[test]
fn install_and_uninstall_round_trip() {
    let mut chain = Chain {
        providers: Vec::new(),
        merge: true,
    };

    let installation = install(&mut chain, Box::new(ColumnCompleter::new()));
    assert!(!chain.merge_results());

    let request = CompletionRequest::from_line(r#"df.groupby(by="Na"#);
    assert_eq!(chain.first_completion(&request, &people_session()), vec!["Name"]);

    assert!(uninstall(&mut chain, installation).is_some());
    assert!(chain.merge_results());
    assert!(chain.first_completion(&request, &people_session()).is_empty());
}
