//! Name-keyed function registry

use super::{FnFunction, PromptFunction, PromptFunctions};
use crate::context::RenderContext;
use crate::error::{PromptError, PromptResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of template functions
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn PromptFunction>>,
}

impl FunctionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with the builtin function pack
    pub fn with_builtins() -> PromptResult<Self> {
        let mut registry = Self::new();
        super::BuiltinFunctions::register_all(&mut registry)?;
        Ok(registry)
    }

    /// Register a function; names must be unique
    pub fn add_function(
        &mut self,
        name: impl Into<String>,
        function: impl PromptFunction + 'static,
    ) -> PromptResult<()> {
        self.add_shared(name, Arc::new(function))
    }

    /// Register a function that is already behind an `Arc`
    pub fn add_shared(
        &mut self,
        name: impl Into<String>,
        function: Arc<dyn PromptFunction>,
    ) -> PromptResult<()> {
        let name = name.into();
        if self.functions.contains_key(&name) {
            return Err(PromptError::duplicate_function(name));
        }
        self.functions.insert(name, function);
        Ok(())
    }

    /// Register a synchronous closure
    pub fn add_fn<F>(&mut self, name: impl Into<String>, func: F) -> PromptResult<()>
    where
        F: Fn(&RenderContext, &[String]) -> PromptResult<Value> + Send + Sync + 'static,
    {
        self.add_function(name, FnFunction::new(func))
    }

    /// Get a function by name
    pub fn get_function(&self, name: &str) -> Option<&Arc<dyn PromptFunction>> {
        self.functions.get(name)
    }

    /// Get all registered function names, sorted
    pub fn function_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[async_trait]
impl PromptFunctions for FunctionRegistry {
    fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    async fn invoke(
        &self,
        name: &str,
        ctx: &RenderContext,
        args: &[String],
    ) -> PromptResult<Value> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| PromptError::unknown_function(name))?;

        debug!(function = name, args = args.len(), "invoking template function");
        function.call(ctx, args).await
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.function_names())
            .finish()
    }
}
