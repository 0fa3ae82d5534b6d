//! Java symbol extraction tests.

use symtree::{Symbol, SymbolEngine, SymbolKind};

fn extract(source: &str) -> Vec<Symbol> {
    SymbolEngine::builtin().extract_symbols(source, "java")
}

const SAMPLE: &str = r#"/**
 * Sample services.
 */

package com.example.services;

import java.util.*;

public interface UserRepository {
    Optional<User> findById(Long id);
    void deleteById(Long id);
}

public abstract class BaseService<T, ID> {
    protected UserRepository repository;

    public BaseService(UserRepository repository) {
        this.repository = repository;
    }

    public abstract T findById(ID id);
}

public class UserService extends BaseService<User, Long> {
    @Override
    public User findById(Long id) {
        return repository.findById(id).orElse(null);
    }

    public static class UserBuilder {
        public User build() {
            return new User();
        }
    }
}

enum UserRole {
    ADMIN("admin"),
    GUEST("guest");

    private final String value;

    UserRole(String value) {
        this.value = value;
    }

    public String getValue() {
        return value;
    }
}
"#;

#[test]
fn test_extract_simple_class() {
    let symbols = extract("class MyClass {}\n");
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].name, "MyClass");
    assert_eq!(symbols[0].kind.as_str(), "class");
    assert_eq!(symbols[0].signature, "class MyClass");
}

#[test]
fn test_extract_class_with_method() {
    let symbols = extract("class MyClass { void method() {} }\n");
    assert_eq!(symbols.len(), 1);
    let children = &symbols[0].children;
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "method");
    assert_eq!(children[0].kind.as_str(), "method");
    assert_eq!(children[0].signature, "void method()");
}

#[test]
fn test_fields_are_not_symbols() {
    let symbols = extract("class MyClass { private int field; }\n");
    assert_eq!(symbols.len(), 1);
    assert!(symbols[0].children.is_empty());
}

#[test]
fn test_extract_interface() {
    let symbols = extract("interface MyInterface { void method(); }\n");
    assert_eq!(symbols[0].kind, SymbolKind::Interface);
    assert_eq!(symbols[0].signature, "interface MyInterface");
    assert_eq!(symbols[0].children[0].kind, SymbolKind::Method);
    assert_eq!(symbols[0].children[0].signature, "void method()");
}

#[test]
fn test_sample_top_level() {
    let symbols = extract(SAMPLE);
    let top: Vec<(&str, SymbolKind, usize)> = symbols
        .iter()
        .map(|s| (s.name.as_str(), s.kind, s.line))
        .collect();
    assert_eq!(
        top,
        vec![
            ("UserRepository", SymbolKind::Interface, 9),
            ("BaseService", SymbolKind::Class, 14),
            ("UserService", SymbolKind::Class, 24),
            ("UserRole", SymbolKind::Enum, 37),
        ]
    );
}

#[test]
fn test_sample_signatures() {
    let symbols = extract(SAMPLE);

    assert_eq!(symbols[0].signature, "public interface UserRepository");
    assert_eq!(
        symbols[0].children[0].signature,
        "Optional<User> findById(Long id)"
    );

    let base = &symbols[1];
    assert_eq!(base.signature, "public abstract class BaseService<T, ID>");
    assert_eq!(base.children[0].kind, SymbolKind::Constructor);
    assert_eq!(
        base.children[0].signature,
        "public BaseService(UserRepository repository)"
    );
    assert_eq!(base.children[1].signature, "public abstract T findById(ID id)");

    let service = &symbols[2];
    assert_eq!(
        service.signature,
        "public class UserService extends BaseService<User, Long>"
    );
    // Annotations are dropped from the header.
    assert_eq!(service.children[0].signature, "public User findById(Long id)");
}

#[test]
fn test_nested_class_methods() {
    let symbols = extract(SAMPLE);
    let builder = &symbols[2].children[1];
    assert_eq!(builder.name, "UserBuilder");
    assert_eq!(builder.kind, SymbolKind::Class);
    assert_eq!(builder.signature, "public static class UserBuilder");
    assert_eq!(builder.children[0].name, "build");
    assert_eq!(builder.children[0].kind, SymbolKind::Method);
}

#[test]
fn test_enum_members() {
    let symbols = extract(SAMPLE);
    let role = &symbols[3];
    assert_eq!(role.signature, "enum UserRole");

    let members: Vec<(&str, SymbolKind)> = role
        .children
        .iter()
        .map(|s| (s.name.as_str(), s.kind))
        .collect();
    assert_eq!(
        members,
        vec![
            ("UserRole", SymbolKind::Constructor),
            ("getValue", SymbolKind::Method),
        ]
    );
    assert_eq!(role.children[0].signature, "UserRole(String value)");
}

#[test]
fn test_generic_method_with_throws() {
    let source = "class Io {\n  public static <T> List<T> copy(List<T> items) throws IOException { return items; }\n}\n";
    let symbols = extract(source);
    assert_eq!(
        symbols[0].children[0].signature,
        "public static <T> List<T> copy(List<T> items) throws IOException"
    );
}
