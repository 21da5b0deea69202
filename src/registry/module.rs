//! Component Modules and the Export-Name Policy
//!
//! A module is a bag of named exports plus an optional default export.
//! Each export is a render target: a function from [`Props`] to rendered output.

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;

use crate::domain::Props;

/// Render function shared by all clones of a [`RenderTarget`]
pub type RenderFn<T> = Arc<dyn Fn(&Props) -> T + Send + Sync>;

/// An invocable unit that produces output when given props
pub struct RenderTarget<T> {
    render: RenderFn<T>,
}

impl<T> RenderTarget<T> {
    pub fn new(render: impl Fn(&Props) -> T + Send + Sync + 'static) -> Self {
        Self {
            render: Arc::new(render),
        }
    }

    /// Invoke the target with a props object
    pub fn render(&self, props: &Props) -> T {
        (self.render)(props)
    }

    /// Whether both handles point at the same implementation
    pub fn same_target(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.render, &other.render)
    }
}

impl<T> Clone for RenderTarget<T> {
    fn clone(&self) -> Self {
        Self {
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> fmt::Debug for RenderTarget<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderTarget").finish_non_exhaustive()
    }
}

/// A loaded module: named exports and an optional default export
pub struct ComponentModule<T> {
    exports: AHashMap<String, RenderTarget<T>>,
    default_export: Option<RenderTarget<T>>,
}

impl<T> ComponentModule<T> {
    /// Create an empty module
    pub fn new() -> Self {
        Self {
            exports: AHashMap::new(),
            default_export: None,
        }
    }

    /// Add a named export
    pub fn export(
        mut self,
        name: impl Into<String>,
        render: impl Fn(&Props) -> T + Send + Sync + 'static,
    ) -> Self {
        self.exports.insert(name.into(), RenderTarget::new(render));
        self
    }

    /// Set the default export
    pub fn default_export(mut self, render: impl Fn(&Props) -> T + Send + Sync + 'static) -> Self {
        self.default_export = Some(RenderTarget::new(render));
        self
    }

    /// Look up a named export
    pub fn get(&self, name: &str) -> Option<&RenderTarget<T>> {
        self.exports.get(name)
    }

    /// The default export, if any
    pub fn default_target(&self) -> Option<&RenderTarget<T>> {
        self.default_export.as_ref()
    }

    /// Names of all named exports (unordered)
    pub fn export_names(&self) -> impl Iterator<Item = &str> {
        self.exports.keys().map(String::as_str)
    }

    /// Resolve the implementation for a component name.
    ///
    /// Conventions are tried in order, first match wins:
    /// PascalCase name, exact name, default export.
    pub fn find_export(&self, name: &str) -> Option<(ExportMatch, RenderTarget<T>)> {
        let pascal = pascal_case(name);
        if let Some(target) = self.get(&pascal) {
            return Some((ExportMatch::PascalCase(pascal), target.clone()));
        }
        if let Some(target) = self.get(name) {
            return Some((ExportMatch::ExactName(name.to_string()), target.clone()));
        }
        self.default_target()
            .map(|target| (ExportMatch::Default, target.clone()))
    }
}

impl<T> Default for ComponentModule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ComponentModule<T> {
    fn clone(&self) -> Self {
        Self {
            exports: self.exports.clone(),
            default_export: self.default_export.clone(),
        }
    }
}

impl<T> fmt::Debug for ComponentModule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.export_names().collect();
        names.sort_unstable();
        f.debug_struct("ComponentModule")
            .field("exports", &names)
            .field("has_default", &self.default_export.is_some())
            .finish()
    }
}

/// Which export-name convention located an implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportMatch {
    /// Export named after the capitalized component name
    PascalCase(String),
    /// Export named exactly like the component
    ExactName(String),
    /// The module's default export
    Default,
}

impl fmt::Display for ExportMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportMatch::PascalCase(name) => write!(f, "capitalized name {name}"),
            ExportMatch::ExactName(name) => write!(f, "original name {name}"),
            ExportMatch::Default => write!(f, "default export"),
        }
    }
}

/// Uppercase the first character, leave the remainder unchanged
pub fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
