use crate::error;
use crate::lang::{ast::Ident, Error};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VariableInfo {
    pub value: i32,
    /// Reads since the last reset. Writes don't count.
    pub usage_count: usize,
}

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Ident, VariableInfo>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn declare(&mut self, var_name: &Ident) {
        if !self.vars.contains_key(var_name) {
            self.vars.insert(var_name.clone(), VariableInfo::default());
        }
    }

    pub fn get(&self, var_name: &str) -> Option<&VariableInfo> {
        self.vars.get(var_name)
    }

    pub fn usage_count(&self, var_name: &str) -> usize {
        self.vars.get(var_name).map_or(0, |info| info.usage_count)
    }

    /// Reads a value and counts the read.
    pub fn fetch(&mut self, var_name: &str) -> Result<i32> {
        match self.vars.get_mut(var_name) {
            Some(info) => {
                info.usage_count += 1;
                Ok(info.value)
            }
            None => Err(error!(UndefinedVariable; format!("{} IS NOT DEFINED", var_name))),
        }
    }

    pub fn store(&mut self, var_name: &Ident, value: i32) {
        match self.vars.get_mut(var_name) {
            Some(info) => info.value = value,
            None => {
                self.vars.insert(
                    var_name.clone(),
                    VariableInfo {
                        value,
                        usage_count: 0,
                    },
                );
            }
        }
    }

    /// Stores an answer to INPUT, which counts as a use of the variable.
    pub fn store_input(&mut self, var_name: &Ident, value: i32) {
        self.store(var_name, value);
        if let Some(info) = self.vars.get_mut(var_name) {
            info.usage_count += 1;
        }
    }

    /// Every variable, sorted by name.
    pub fn sorted(&self) -> Vec<(&Ident, &VariableInfo)> {
        let mut v: Vec<_> = self.vars.iter().collect();
        v.sort_by(|a, b| a.0.cmp(b.0));
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_keeps_value() {
        let mut var = Var::new();
        let a: Ident = "A".into();
        var.store(&a, 5);
        var.declare(&a);
        assert_eq!(var.get("A"), Some(&VariableInfo { value: 5, usage_count: 0 }));
    }

    #[test]
    fn test_fetch_counts_reads_only() {
        let mut var = Var::new();
        let a: Ident = "A".into();
        var.store(&a, 7);
        var.store(&a, 8);
        assert_eq!(var.usage_count("A"), 0);
        assert_eq!(var.fetch("A").unwrap(), 8);
        assert_eq!(var.fetch("A").unwrap(), 8);
        assert_eq!(var.usage_count("A"), 2);
    }

    #[test]
    fn test_undefined() {
        let mut var = Var::new();
        let e = var.fetch("NOPE").unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::UndefinedVariable);
        assert_eq!(e.to_string(), "UNDEFINED VARIABLE; NOPE IS NOT DEFINED");
    }

    #[test]
    fn test_input_counts() {
        let mut var = Var::new();
        let n: Ident = "N".into();
        var.store_input(&n, 3);
        assert_eq!(var.get("N"), Some(&VariableInfo { value: 3, usage_count: 1 }));
    }
}
