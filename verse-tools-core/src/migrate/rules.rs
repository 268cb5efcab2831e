// substitution rules for the null safety migration
//
// rules run in order over one buffer; later rules see the output of earlier ones.

use lazy_static::lazy_static;
use regex::Regex;

/// a single (matcher, replacement) pair
#[derive(Debug)]
pub enum Rule {
    /// plain substring replacement
    Literal { from: String, to: String },
    /// regex replacement; `replacement` may use `${n}` group references
    Pattern {
        regex: Regex,
        replacement: &'static str,
    },
}

impl Rule {
    fn literal(from: impl Into<String>, to: impl Into<String>) -> Self {
        Rule::Literal {
            from: from.into(),
            to: to.into(),
        }
    }

    fn pattern(regex: &str, replacement: &'static str) -> Self {
        Rule::Pattern {
            regex: Regex::new(regex).unwrap(),
            replacement,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Rule::Literal { from, to } => text.replace(from.as_str(), to),
            Rule::Pattern { regex, replacement } => {
                regex.replace_all(text, *replacement).into_owned()
            }
        }
    }
}

/// run every rule in order
pub fn apply_rules(text: &str, rules: &[Rule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |buffer, rule| rule.apply(&buffer))
}

/// legacy button widgets and their material 3 replacements
pub const BUTTON_RENAMES: [(&str, &str); 3] = [
    ("FlatButton(", "TextButton("),
    ("RaisedButton(", "ElevatedButton("),
    ("OutlineButton(", "OutlinedButton("),
];

/// text theme accessors renamed in the 2021 typography update
pub const TEXT_THEME_RENAMES: [(&str, &str); 11] = [
    (".headline1", ".displayLarge"),
    (".headline2", ".displayMedium"),
    (".headline3", ".displaySmall"),
    (".headline4", ".headlineMedium"),
    (".headline5", ".headlineSmall"),
    (".headline6", ".titleLarge"),
    (".subtitle1", ".titleMedium"),
    (".subtitle2", ".titleSmall"),
    (".bodyText1", ".bodyLarge"),
    (".bodyText2", ".bodyMedium"),
    (".caption", ".bodySmall"),
];

/// static fields in the size config that are assigned in `init`
pub const LATE_FIELDS: [(&str, &str); 5] = [
    ("MediaQueryData", "_mediaQueryData"),
    ("double", "screenWidth"),
    ("double", "screenHeight"),
    ("double", "defaultSize"),
    ("Orientation", "orientation"),
];

const REQUIRED_ANNOTATION: &str = r"@required\s+this\.";
const NULLABLE_KEY: &str = r"(\{\s*)Key key,";
const OVERFLOW_VISIBLE: &str = r"overflow:\s*Overflow\.visible";
const APP_BAR_SIGNATURE: &str = r"\{bool isTransparent = false,\s*String title\}";

fn nullable_key_rule() -> Rule {
    Rule::pattern(NULLABLE_KEY, "${1}Key? key,")
}

lazy_static! {
    /// rules for every source file that has no dedicated handling
    pub static ref GENERIC_RULES: Vec<Rule> = {
        let mut rules = vec![
            Rule::pattern(REQUIRED_ANNOTATION, "required this."),
            nullable_key_rule(),
        ];
        rules.extend(BUTTON_RENAMES.iter().map(|&(from, to)| Rule::literal(from, to)));
        rules.push(Rule::pattern(OVERFLOW_VISIBLE, "clipBehavior: Clip.none"));
        rules.extend(TEXT_THEME_RENAMES.iter().map(|&(from, to)| Rule::literal(from, to)));
        rules
    };

    /// `size_config.dart`: mark uninitialised statics `late`, fix the key param
    pub static ref SIZE_CONFIG_RULES: Vec<Rule> = {
        let mut rules: Vec<Rule> = LATE_FIELDS
            .iter()
            .map(|&(ty, name)| {
                Rule::literal(
                    format!("static {ty} {name};"),
                    format!("static late {ty} {name};"),
                )
            })
            .collect();
        rules.push(nullable_key_rule());
        rules
    };

    /// `components/app_bar.dart`: make `title` a required named parameter
    pub static ref APP_BAR_RULES: Vec<Rule> = vec![Rule::pattern(
        APP_BAR_SIGNATURE,
        "{bool isTransparent = false, required String title}",
    )];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic(text: &str) -> String {
        apply_rules(text, &GENERIC_RULES)
    }

    #[test]
    fn generic_table_order() {
        // 2 patterns, 3 buttons, 1 pattern, 11 theme renames
        assert_eq!(GENERIC_RULES.len(), 17);
        assert_eq!(SIZE_CONFIG_RULES.len(), 6);
        assert_eq!(APP_BAR_RULES.len(), 1);
    }

    #[test]
    fn replaces_legacy_buttons() {
        let out = generic("child: FlatButton(onPressed: go), other: RaisedButton(), x: OutlineButton(");
        assert!(out.contains("TextButton(onPressed: go)"));
        assert!(!out.contains("FlatButton("));
        assert!(out.contains("ElevatedButton()"));
        assert!(out.contains("OutlinedButton("));
    }

    #[test]
    fn drops_required_annotation() {
        let out = generic("const Card({@required  this.title, @required\n this.onTap});");
        assert_eq!(out, "const Card({required this.title, required this.onTap});");
    }

    #[test]
    fn marks_key_nullable_once() {
        assert_eq!(generic("Body({Key key, this.x})"), "Body({Key? key, this.x})");
        assert_eq!(generic("Body({\n    Key key,\n})"), "Body({\n    Key? key,\n})");
        assert_eq!(generic("Body({Key? key, this.x})"), "Body({Key? key, this.x})");
    }

    #[test]
    fn key_outside_braces_is_untouched() {
        assert_eq!(generic("void f(Key key, int x)"), "void f(Key key, int x)");
    }

    #[test]
    fn overflow_becomes_clip_behavior() {
        assert_eq!(
            generic("Stack(overflow:   Overflow.visible, children: [])"),
            "Stack(clipBehavior: Clip.none, children: [])"
        );
    }

    #[test]
    fn renames_text_theme_styles() {
        let out = generic(
            "theme.textTheme.headline6; theme.textTheme.bodyText1; theme.textTheme.caption; t.headline4",
        );
        assert_eq!(
            out,
            "theme.textTheme.titleLarge; theme.textTheme.bodyLarge; theme.textTheme.bodySmall; t.headlineMedium"
        );
    }

    #[test]
    fn generic_rules_are_idempotent() {
        let source = "class A extends StatelessWidget {\n  const A({Key key, @required this.title}) : super(key: key);\n  Widget build(c) => FlatButton(child: Text(title, style: Theme.of(c).textTheme.headline1));\n}\n";
        let once = generic(source);
        assert_ne!(once, source);
        assert_eq!(generic(&once), once);
    }

    #[test]
    fn new_names_never_match_old_ones() {
        for (_, new) in TEXT_THEME_RENAMES.iter().chain(BUTTON_RENAMES.iter()) {
            for (old, _) in TEXT_THEME_RENAMES.iter().chain(BUTTON_RENAMES.iter()) {
                assert!(!new.contains(old), "{new} contains {old}");
            }
        }
    }

    #[test]
    fn size_config_rules_add_late() {
        let source = "class SizeConfig {\n  static MediaQueryData _mediaQueryData;\n  static double screenWidth;\n  static double screenHeight;\n  static double defaultSize;\n  static Orientation orientation;\n}\n";
        let out = apply_rules(source, &SIZE_CONFIG_RULES);
        assert_eq!(out.matches("static late ").count(), 5);
        assert!(out.contains("static late MediaQueryData _mediaQueryData;"));
        assert!(out.contains("static late Orientation orientation;"));
        assert_eq!(apply_rules(&out, &SIZE_CONFIG_RULES), out);
    }

    #[test]
    fn app_bar_rule_needs_exact_signature() {
        let exact = "AppBar buildAppBar(BuildContext context, {bool isTransparent = false, String title}) {";
        assert_eq!(
            apply_rules(exact, &APP_BAR_RULES),
            "AppBar buildAppBar(BuildContext context, {bool isTransparent = false, required String title}) {"
        );

        let reordered = "AppBar buildAppBar({String title, bool isTransparent = false}) {";
        assert_eq!(apply_rules(reordered, &APP_BAR_RULES), reordered);

        let spaced = "{bool isTransparent=false, String title}";
        assert_eq!(apply_rules(spaced, &APP_BAR_RULES), spaced);
    }
}
