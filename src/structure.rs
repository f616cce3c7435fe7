//! Distribution tree plumbing: the shared `Writable` interface, the typed
//! traversal context, and plain directories that compose other nodes.
//!
//! A tree is processed in two passes. `prepare` walks top-down and lets lazy
//! nodes materialize their content; `write` then persists the prepared tree
//! below a local root directory.

use crate::error::DistributionError;
use crate::util::{create_with_backoff, replace_file_atomic_backoff};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Position of a node during traversal: the path segments of its ancestors.
/// Passed by value; descending yields a new context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraversalContext {
    segments: Vec<String>,
}

impl TraversalContext {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn relative_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

impl fmt::Display for TraversalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

/// A node of the distribution tree.
pub trait Writable: Send + Sync {
    fn name(&self) -> &str;

    /// Materialize content. `ctx` locates the node's parent.
    fn prepare(&self, ctx: TraversalContext) -> Result<(), DistributionError>;

    /// Persist the node below `parent`. Only valid after `prepare`.
    fn write(&self, parent: &Path) -> Result<()>;
}

/// Write `bytes` to `parent/name` through a temp file, then swap it into place.
pub fn write_file_atomic(parent: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let dest = parent.join(name);
    let tmp = parent.join(format!(".{name}.inprogress"));
    let f = create_with_backoff(&tmp, 16, 50).with_context(|| format!("create {}", tmp.display()))?;
    let mut w = BufWriter::new(f);
    w.write_all(bytes).with_context(|| format!("write {}", tmp.display()))?;
    w.flush().with_context(|| format!("flush {}", tmp.display()))?;
    drop(w);
    replace_file_atomic_backoff(&tmp, &dest)?;
    Ok(dest)
}

/// A directory node. Children are prepared in insertion order, or concurrently
/// on the rayon pool when `parallel` is set.
pub struct Directory {
    name: String,
    children: Vec<Box<dyn Writable>>,
    parallel: bool,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), children: Vec::new(), parallel: false }
    }

    pub fn parallel(mut self, yes: bool) -> Self {
        self.parallel = yes;
        self
    }

    pub fn with_child(mut self, child: impl Writable + 'static) -> Self {
        self.add(Box::new(child));
        self
    }

    pub fn add(&mut self, child: Box<dyn Writable>) {
        self.children.push(child);
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Writable for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&self, ctx: TraversalContext) -> Result<(), DistributionError> {
        let inner = ctx.child(self.name.as_str());
        if self.parallel {
            self.children.par_iter().try_for_each(|c| c.prepare(inner.clone()))
        } else {
            self.children.iter().try_for_each(|c| c.prepare(inner.clone()))
        }
    }

    fn write(&self, parent: &Path) -> Result<()> {
        let dir = parent.join(&self.name);
        fs::create_dir_all(&dir).with_context(|| format!("create dir {}", dir.display()))?;
        for child in &self.children {
            child.write(&dir)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.children.iter().map(|c| c.name()).collect();
        f.debug_struct("Directory")
            .field("name", &self.name)
            .field("children", &names)
            .field("parallel", &self.parallel)
            .finish()
    }
}
