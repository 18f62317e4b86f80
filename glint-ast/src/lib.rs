use glint_diagnostics::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One binding introduced by an import statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specifier {
    /// Default import: import app from "./app";
    Default { local: String },
    /// Namespace import: import * as app from "./app";
    Namespace { local: String },
    /// Named import: import { run as start } from "./app";
    Named { local: String, imported: String },
}

impl Specifier {
    /// The local binding name this specifier introduces
    pub fn local(&self) -> &str {
        match self {
            Specifier::Default { local }
            | Specifier::Namespace { local }
            | Specifier::Named { local, .. } => local,
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Specifier::Default { local } => write!(f, "{}", local),
            Specifier::Namespace { local } => write!(f, "* as {}", local),
            Specifier::Named { local, imported } if local == imported => {
                write!(f, "{}", imported)
            }
            Specifier::Named { local, imported } => write!(f, "{} as {}", imported, local),
        }
    }
}

/// Import statement: specifiers plus a module source string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatement {
    pub specifiers: Vec<Specifier>,
    pub source: String,
    pub span: Span,
}

impl ImportStatement {
    pub fn new(specifiers: Vec<Specifier>, source: impl Into<String>, span: Span) -> Self {
        Self {
            specifiers,
            source: source.into(),
            span,
        }
    }

    /// Side-effect import with no bindings: import "./module";
    pub fn side_effect(source: impl Into<String>, span: Span) -> Self {
        Self::new(Vec::new(), source, span)
    }

    /// Default-binding import: import local from "./module";
    pub fn default_binding(
        local: impl Into<String>,
        source: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::new(
            vec![Specifier::Default {
                local: local.into(),
            }],
            source,
            span,
        )
    }

    /// Namespace-binding import: import * as local from "./module";
    pub fn namespace_binding(
        local: impl Into<String>,
        source: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::new(
            vec![Specifier::Namespace {
                local: local.into(),
            }],
            source,
            span,
        )
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.specifiers.is_empty() {
            return write!(f, "import '{}';", self.source);
        }

        // Named specifiers render inside one brace group, default/namespace
        // specifiers render bare; the grammar allows a default binding
        // followed by a brace group or a namespace binding.
        write!(f, "import ")?;
        let mut named: Vec<&Specifier> = Vec::new();
        let mut first = true;
        for specifier in &self.specifiers {
            if let Specifier::Named { .. } = specifier {
                named.push(specifier);
                continue;
            }
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", specifier)?;
            first = false;
        }
        if !named.is_empty() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{{ ")?;
            for (index, specifier) in named.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", specifier)?;
            }
            write!(f, " }}")?;
        }
        write!(f, " from '{}';", self.source)
    }
}

/// Declaration kind for variable statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeclarationKind::Const => write!(f, "const"),
            DeclarationKind::Let => write!(f, "let"),
            DeclarationKind::Var => write!(f, "var"),
        }
    }
}

/// Variable declaration with a single declarator: const name = init;
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub kind: DeclarationKind,
    pub name: String,
    pub init: Expression,
    pub span: Span,
}

impl VariableDeclaration {
    pub fn constant(name: impl Into<String>, init: Expression, span: Span) -> Self {
        Self {
            kind: DeclarationKind::Const,
            name: name.into(),
            init,
            span,
        }
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} = {};", self.kind, self.name, self.init)
    }
}

/// Expression used for its effect: Object.freeze(app);
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

impl ExpressionStatement {
    pub fn new(expression: Expression, span: Span) -> Self {
        Self { expression, span }
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{};", self.expression)
    }
}

/// One key/value pair of an object literal; the key always renders as a
/// string literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub key: String,
    pub value: Expression,
}

impl Property {
    pub fn new(key: impl Into<String>, value: Expression) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Minimal expression model: just enough structure for synthesized output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Identifier(String),
    StringLiteral(String),
    Object(Vec<Property>),
    Member {
        object: Box<Expression>,
        property: String,
    },
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral(value.into())
    }

    pub fn member(object: Expression, property: impl Into<String>) -> Self {
        Expression::Member {
            object: Box::new(object),
            property: property.into(),
        }
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            callee: Box::new(callee),
            arguments,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::StringLiteral(value) => write!(f, "'{}'", value),
            Expression::Object(properties) => {
                if properties.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (index, property) in properties.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}': {}", property.key, property.value)?;
                }
                write!(f, " }}")
            }
            Expression::Member { object, property } => write!(f, "{}.{}", object, property),
            Expression::Call { callee, arguments } => {
                write!(f, "{}(", callee)?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Opaque statement handed back to the host compiler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Import(ImportStatement),
    VariableDeclaration(VariableDeclaration),
    Expression(ExpressionStatement),
}

impl Statement {
    pub fn span(&self) -> &Span {
        match self {
            Statement::Import(import) => &import.span,
            Statement::VariableDeclaration(declaration) => &declaration.span,
            Statement::Expression(expression) => &expression.span,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::Import(import) => write!(f, "{}", import),
            Statement::VariableDeclaration(declaration) => write!(f, "{}", declaration),
            Statement::Expression(expression) => write!(f, "{}", expression),
        }
    }
}
