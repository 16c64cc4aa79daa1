//! Shortcut route extraction.
//!
//! `RouteCollector` walks one module and turns every matching export into a
//! `DetectedShortcut`:
//!
//! ```typescript
//! // Curried form
//! export const cartRoute = createShortcutRoute("/cart")({ name: "Cart" });
//! // Direct form
//! export const cartRoute = createShortcutRoute("/cart", { name: "Cart" });
//! ```
//!
//! ## Module Structure
//!
//! - `call_pattern`: recognizes the two call shapes and returns their raw arguments
//! - `literal`: converts the raw argument nodes into shortcut data

pub mod call_pattern;
pub mod literal;


use swc_ecma_ast::{Decl, ExportDecl, Module, Pat, Stmt, VarDeclarator};
use swc_ecma_visit::{Visit, VisitWith};

use crate::config::ResolvedOptions;
use crate::core::data::DetectedShortcut;

pub use call_pattern::{ShortcutCallArgs, match_shortcut_call};
pub use literal::extract_shortcut;

/// Collects shortcut declarations from the top level of one module.
///
/// Only `export const|let|var` declarations are inspected. Default exports,
/// plain bindings and anything nested inside functions or namespaces never
/// produce a shortcut.
pub struct RouteCollector<'a> {
    file_path: &'a str,
    options: &'a ResolvedOptions,
    /// Shortcuts in declaration order.
    pub shortcuts: Vec<DetectedShortcut>,
}

impl<'a> RouteCollector<'a> {
    pub fn new(file_path: &'a str, options: &'a ResolvedOptions) -> Self {
        Self {
            file_path,
            options,
            shortcuts: Vec::new(),
        }
    }

    /// Run the collector over a module and return what it found.
    pub fn collect(mut self, module: &Module) -> Vec<DetectedShortcut> {
        module.visit_with(&mut self);
        self.shortcuts
    }

    fn check_declarator(&mut self, decl: &VarDeclarator) {
        let Pat::Ident(binding) = &decl.name else {
            return;
        };
        if !self
            .options
            .route_export_pattern
            .is_match(binding.id.sym.as_str())
        {
            return;
        }
        let Some(init) = &decl.init else { return };

        if let Some(args) = match_shortcut_call(init, &self.options.function_name)
            && let Some((path, config)) = extract_shortcut(args.path, args.config)
        {
            self.shortcuts.push(DetectedShortcut {
                path,
                config,
                file_path: self.file_path.to_string(),
            });
        }
    }
}

impl Visit for RouteCollector<'_> {
    fn visit_export_decl(&mut self, node: &ExportDecl) {
        // Namespaces exported from the module are not descended into.
        if let Decl::Var(var_decl) = &node.decl {
            for decl in &var_decl.decls {
                self.check_declarator(decl);
            }
        }
    }

    // Top-level statements hold every nested scope; none of them can export.
    fn visit_stmt(&mut self, _node: &Stmt) {}
}
