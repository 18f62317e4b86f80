//! Replacement-statement synthesis.
//!
//! The specifier shape of the original import picks the output shape:
//! no specifiers expand to one side-effect import per module, and a single
//! default or namespace binding expands to private per-module imports plus
//! a frozen aggregate namespace object. Anything else is unsupported.

use crate::error::ExpandError;
use crate::resolver::ChildModule;
use glint_ast::{
    Expression, ExpressionStatement, ImportStatement, Property, Specifier, Statement,
    VariableDeclaration,
};
use glint_diagnostics::Span;

pub fn synthesize(
    import: &ImportStatement,
    modules: &[ChildModule],
) -> Result<Vec<Statement>, ExpandError> {
    if import.specifiers.is_empty() {
        return Ok(modules
            .iter()
            .map(|module| {
                Statement::Import(ImportStatement::side_effect(
                    module.relative_import_path.clone(),
                    import.span.clone(),
                ))
            })
            .collect());
    }

    let (local, is_default) = match import.specifiers.as_slice() {
        [Specifier::Default { local }] => (local.as_str(), true),
        [Specifier::Namespace { local }] => (local.as_str(), false),
        _ => {
            return Err(ExpandError::UnsupportedSpecifierShape {
                pattern: import.source.clone(),
                span: import.span.clone(),
            })
        }
    };

    let mut replacement = Vec::with_capacity(modules.len() + 2);
    let mut properties = Vec::with_capacity(modules.len());
    for module in modules {
        let name = module
            .derived_name
            .as_deref()
            .ok_or_else(|| ExpandError::UnresolvableIdentifier {
                file: module.source_file.display().to_string(),
                span: import.span.clone(),
            })?;
        let private = format!("_{}_{}", local, name);
        let member_import = if is_default {
            ImportStatement::default_binding(
                private.clone(),
                module.relative_import_path.clone(),
                import.span.clone(),
            )
        } else {
            ImportStatement::namespace_binding(
                private.clone(),
                module.relative_import_path.clone(),
                import.span.clone(),
            )
        };
        replacement.push(Statement::Import(member_import));
        properties.push(Property::new(
            module.relative_import_path.clone(),
            Expression::identifier(private),
        ));
    }

    replacement.push(Statement::VariableDeclaration(VariableDeclaration::constant(
        local,
        Expression::Object(properties),
        import.span.clone(),
    )));
    replacement.push(freeze_namespace_object(local, import.span.clone()));
    Ok(replacement)
}

/// Object.freeze(local); — pins the aggregate's key set and bindings
fn freeze_namespace_object(local: &str, span: Span) -> Statement {
    Statement::Expression(ExpressionStatement::new(
        Expression::call(
            Expression::member(Expression::identifier("Object"), "freeze"),
            vec![Expression::identifier(local)],
        ),
        span,
    ))
}
