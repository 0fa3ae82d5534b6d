//! Built-in language table.
//!
//! `go` and `ruby` are configured but their grammars are not linked, so the
//! parser provider reports them as unsupported.

use super::LanguageConfig;

pub(super) fn builtin_languages() -> Vec<(&'static str, LanguageConfig)> {
    vec![
        ("python", python()),
        ("java", java()),
        ("javascript", javascript()),
        ("typescript", typescript("tree-sitter-typescript", &["ts", "mts", "cts"])),
        ("tsx", typescript("tree-sitter-tsx", &["tsx"])),
        ("rust", rust()),
        ("c", c()),
        ("cpp", cpp()),
        ("go", go()),
        ("ruby", ruby()),
    ]
}

fn python() -> LanguageConfig {
    LanguageConfig::new("tree-sitter-python")
        .classes(&["class_definition"])
        .functions(&["function_definition"])
        .names(&["identifier"])
        .template("class", "class {name}")
        .template("function", "def {name}(...)")
        .template("method", "def {name}(...)")
        .extensions(&["py", "pyi"])
}

fn java() -> LanguageConfig {
    LanguageConfig::new("tree-sitter-java")
        .classes(&["class_declaration", "record_declaration"])
        .interfaces(&["interface_declaration", "annotation_type_declaration"])
        .enums(&["enum_declaration"])
        .constructors(&["constructor_declaration", "compact_constructor_declaration"])
        .functions(&["method_declaration"])
        .names(&["identifier"])
        .template("class", "class {name}")
        .template("interface", "interface {name}")
        .template("enum", "enum {name}")
        .template("constructor", "{name}(...)")
        .template("method", "{name}(...)")
        .template("function", "{name}(...)")
        .extensions(&["java"])
}

fn javascript() -> LanguageConfig {
    LanguageConfig::new("tree-sitter-javascript")
        .classes(&["class_declaration", "class"])
        .functions(&[
            "function_declaration",
            "generator_function_declaration",
            "method_definition",
        ])
        .names(&["identifier", "property_identifier"])
        .template("class", "class {name}")
        .template("function", "function {name}(...)")
        .template("method", "{name}(...)")
        .extensions(&["js", "mjs", "cjs", "jsx"])
}

fn typescript(package: &str, extensions: &[&str]) -> LanguageConfig {
    LanguageConfig::new(package)
        .classes(&["class_declaration", "abstract_class_declaration", "class"])
        .interfaces(&["interface_declaration"])
        .enums(&["enum_declaration"])
        .functions(&[
            "function_declaration",
            "generator_function_declaration",
            "function_signature",
            "method_definition",
            "method_signature",
            "abstract_method_signature",
        ])
        .names(&["identifier", "type_identifier", "property_identifier"])
        .template("class", "class {name}")
        .template("interface", "interface {name}")
        .template("enum", "enum {name}")
        .template("function", "function {name}(...)")
        .template("method", "{name}(...)")
        .extensions(extensions)
}

fn rust() -> LanguageConfig {
    LanguageConfig::new("tree-sitter-rust")
        .classes(&["struct_item", "union_item", "impl_item"])
        .interfaces(&["trait_item"])
        .enums(&["enum_item"])
        .functions(&["function_item", "function_signature_item"])
        .names(&[
            "identifier",
            "type_identifier",
            "generic_type",
            "scoped_type_identifier",
        ])
        .name_field("impl_item", "type")
        .template("class", "struct {name}")
        .template("interface", "trait {name}")
        .template("enum", "enum {name}")
        .template("function", "fn {name}(...)")
        .template("method", "fn {name}(...)")
        .extensions(&["rs"])
}

fn c() -> LanguageConfig {
    LanguageConfig::new("tree-sitter-c")
        .functions(&["function_declarator"])
        .names(&["identifier"])
        .template("function", "{name}(...)")
        .extensions(&["c", "h"])
}

fn cpp() -> LanguageConfig {
    LanguageConfig::new("tree-sitter-cpp")
        .classes(&["class_specifier", "struct_specifier"])
        .enums(&["enum_specifier"])
        .functions(&["function_declarator"])
        .names(&[
            "identifier",
            "field_identifier",
            "qualified_identifier",
            "destructor_name",
            "operator_name",
            "type_identifier",
        ])
        .template("class", "class {name}")
        .template("enum", "enum {name}")
        .template("function", "{name}(...)")
        .template("method", "{name}(...)")
        .extensions(&["cpp", "hpp", "cc", "cxx", "hh", "hxx"])
}

fn go() -> LanguageConfig {
    LanguageConfig::new("tree-sitter-go")
        .classes(&["type_spec"])
        .functions(&["function_declaration", "method_declaration"])
        .names(&["identifier", "field_identifier", "type_identifier"])
        .template("class", "type {name}")
        .template("function", "func {name}(...)")
        .template("method", "func {name}(...)")
        .extensions(&["go"])
}

fn ruby() -> LanguageConfig {
    LanguageConfig::new("tree-sitter-ruby")
        .classes(&["class", "module", "singleton_class"])
        .functions(&["method", "singleton_method"])
        .names(&["constant", "identifier", "scope_resolution"])
        .template("class", "class {name}")
        .template("function", "def {name}")
        .template("method", "def {name}")
        .extensions(&["rb"])
}
