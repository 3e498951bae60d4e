use esmfix_core::{
    named_specifiers, namespace_specifiers, rewrite_named_imports, rewrite_namespace_imports,
    rewrite_specifiers,
};
use proptest::prelude::*;

/// One piece of generated file content together with its expected rewrite.
#[derive(Debug, Clone)]
enum Piece {
    Plain(String),
    Namespace { ident: String, path: String },
    Named { path: String },
    Bare { path: String },
}

impl Piece {
    fn input(&self) -> String {
        match self {
            Piece::Plain(text) => text.clone(),
            Piece::Namespace { ident, path } => format!("export * as {ident} from \"{path}\";"),
            Piece::Named { path } => format!("export {{ A }} from \"{path}\";"),
            Piece::Bare { path } => format!("import {{ B }} from \"{path}\";"),
        }
    }

    fn expected(&self) -> String {
        match self {
            Piece::Plain(text) => text.clone(),
            Piece::Namespace { ident, path } => {
                format!("export * as {ident} from \"{path}/index.js\";")
            }
            Piece::Named { path } => format!("export {{ A }} from \"{path}.js\";"),
            Piece::Bare { path } => format!("import {{ B }} from \"{path}\";"),
        }
    }
}

// Plain text avoids the characters that could complete or extend a clause.
fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        "[a-z \n/=]{0,12}".prop_map(Piece::Plain),
        ("[a-zA-Z_$][a-zA-Z0-9_$]{0,8}", "[a-zA-Z0-9_./-]{0,16}")
            .prop_map(|(ident, path)| Piece::Namespace { ident, path }),
        "\\.{1,2}/[a-zA-Z0-9_./-]{0,12}".prop_map(|path| Piece::Named { path }),
        "@?[a-z][a-z0-9/-]{0,12}".prop_map(|path| Piece::Bare { path }),
    ]
}

fn join(pieces: &[Piece], f: fn(&Piece) -> String) -> String {
    pieces.iter().map(f).collect::<Vec<_>>().join("\n")
}

proptest! {
    #[test]
    fn rewrite_only_touches_clause_paths(pieces in prop::collection::vec(piece(), 0..12)) {
        let input = join(&pieces, Piece::input);
        let rewrite = rewrite_specifiers(&input).unwrap();
        prop_assert_eq!(rewrite.content, join(&pieces, Piece::expected));

        let namespaces = pieces.iter().filter(|p| matches!(p, Piece::Namespace { .. })).count();
        let named = pieces.iter().filter(|p| matches!(p, Piece::Named { .. })).count();
        prop_assert_eq!(rewrite.namespace_rewrites, namespaces);
        prop_assert_eq!(rewrite.named_rewrites, named);
    }

    #[test]
    fn spans_between_clauses_are_preserved(pieces in prop::collection::vec(piece(), 0..12)) {
        let input = join(&pieces, Piece::input);
        let output = rewrite_namespace_imports(&input).unwrap();

        let spans = |content: &str| -> Vec<String> {
            let mut spans = Vec::new();
            let mut last = 0;
            for m in namespace_specifiers(content).unwrap() {
                spans.push(content[last..m.offset].to_string());
                last = m.end();
            }
            spans.push(content[last..].to_string());
            spans
        };
        prop_assert_eq!(spans(&input), spans(&output));
    }

    #[test]
    fn bare_specifiers_are_untouched(path in "@?[a-z][a-z0-9/-]{0,16}") {
        let input = format!("import {{ Baz }} from \"{path}\";\n");
        prop_assert_eq!(rewrite_named_imports(&input).unwrap(), input.clone());
        prop_assert!(named_specifiers(&input).unwrap().is_empty());
    }

    #[test]
    fn reapplying_namespace_pass_appends_again(path in "[a-zA-Z0-9_./-]{0,16}") {
        let input = format!("export * as types from \"{path}\";");
        let twice = rewrite_namespace_imports(&rewrite_namespace_imports(&input).unwrap()).unwrap();
        prop_assert_eq!(twice, format!("export * as types from \"{path}/index.js/index.js\";"));
    }
}
