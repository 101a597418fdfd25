// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides a recording backend and fixture helpers for template construction tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use templatex::template::{Backend, FilterFn, FilterRegistry, Options};

/// Stand-in for the template engine: records how it was constructed and
/// which filters were installed afterwards.
#[derive(Debug, Default)]
pub struct RecordedEngine {
    pub loader: Option<String>,
    pub source: Option<String>,
    pub options: Options,
    pub filters: BTreeMap<&'static str, FilterFn>,
}

impl FilterRegistry for RecordedEngine {
    fn register_filter(&mut self, name: &'static str, filter: FilterFn) {
        self.filters.insert(name, filter);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Environment { loader: String, options: Options },
    Template { source: String, options: Options },
}

#[derive(Debug, PartialEq)]
pub struct RejectedOption(pub String);

/// Backend that records every constructor call. Filters listed in
/// `preinstalled` are present on every engine it builds, and option names in
/// `rejected` make construction fail.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: RefCell<Vec<Call>>,
    pub preinstalled: Vec<(&'static str, FilterFn)>,
    pub rejected: Vec<String>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preinstalled(mut self, name: &'static str, filter: FilterFn) -> Self {
        self.preinstalled.push((name, filter));
        self
    }

    pub fn rejecting(mut self, option: &str) -> Self {
        self.rejected.push(option.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn check(&self, options: &Options) -> Result<(), RejectedOption> {
        match self.rejected.iter().find(|name| options.contains_key(name)) {
            Some(name) => Err(RejectedOption(name.clone())),
            None => Ok(()),
        }
    }

    fn engine(&self, options: &Options) -> RecordedEngine {
        RecordedEngine {
            options: options.clone(),
            filters: self.preinstalled.iter().copied().collect(),
            ..RecordedEngine::default()
        }
    }
}

impl Backend for RecordingBackend {
    type Loader = String;
    type Environment = RecordedEngine;
    type Template = RecordedEngine;
    type Error = RejectedOption;

    fn environment(
        &self,
        loader: String,
        options: &Options,
    ) -> Result<RecordedEngine, RejectedOption> {
        self.calls.borrow_mut().push(Call::Environment {
            loader: loader.clone(),
            options: options.clone(),
        });
        self.check(options)?;

        let mut engine = self.engine(options);
        engine.loader = Some(loader);
        Ok(engine)
    }

    fn template(&self, source: &str, options: &Options) -> Result<RecordedEngine, RejectedOption> {
        self.calls.borrow_mut().push(Call::Template {
            source: source.to_string(),
            options: options.clone(),
        });
        self.check(options)?;

        let mut engine = self.engine(options);
        engine.source = Some(source.to_string());
        Ok(engine)
    }
}

pub fn shout(value: &str) -> String {
    value.to_uppercase()
}

/// Write `files` (name, contents) into `dir`, creating parent directories
pub fn write_templates(dir: &Path, files: &[(&str, &str)]) {
    for (name, contents) in files {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}
