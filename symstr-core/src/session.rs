//! The solving session: node arena, hash-consing table, variables and
//! assertions.
//!
//! A [`Session`] is scoped to one solving attempt. It is append-only except for
//! [`Session::rollback`], which discards everything created after a
//! [`Checkpoint`].
//!
//! # Examples
//!
//! ```
//! use symstr_core::ast::{Kind, Literal, Opcode};
//! use symstr_core::session::Session;
//!
//! let mut ss = Session::new();
//! let s = ss.declare("s", Kind::String);
//! let len1 = ss.mk_app(Opcode::StrLen, &[s]).unwrap();
//! let len2 = ss.mk_app(Opcode::StrLen, &[s]).unwrap();
//! assert_eq!(len1, len2);
//!
//! let hello = ss.mk_literal(Literal::Str(b"hello".to_vec()));
//! assert_eq!(ss.literal_of(hello), Some(&Literal::Str(b"hello".to_vec())));
//! ```

use crate::ast::{Handle, Kind, Literal, Node, NodeOp, Opcode, VarId};
use crate::config::SessionConfig;
use crate::error::{Result, SymstrError};
use crate::statistics::SessionStats;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

/// Metadata of a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarInfo {
    /// Display name
    pub name: String,
    /// Sort of the variable
    pub kind: Kind,
    /// Node holding the variable
    pub handle: Handle,
    /// Introduced by the library rather than the user
    pub internal: bool,
}

/// Who recorded an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionOrigin {
    /// Asserted by the host program
    User,
    /// Side condition of an emulated operator
    Internal,
}

/// A hard constraint recorded in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assertion {
    /// Boolean node
    pub handle: Handle,
    /// Who recorded it
    pub origin: AssertionOrigin,
}

/// Snapshot of the session sizes, see [`Session::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    nodes: usize,
    vars: usize,
    assertions: usize,
}

type EmulationKey = (Opcode, SmallVec<[Handle; 3]>);

/// Mutable context for one solving attempt.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    nodes: Vec<Node>,
    cache: FxHashMap<Node, Handle>,
    vars: Vec<VarInfo>,
    assertions: Vec<Assertion>,
    emulated: FxHashMap<EmulationKey, Handle>,
    stats: SessionStats,
}

impl Session {
    /// Create a session with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with custom configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            nodes: Vec::with_capacity(config.initial_capacity),
            cache: FxHashMap::default(),
            vars: Vec::new(),
            assertions: Vec::new(),
            emulated: FxHashMap::default(),
            stats: SessionStats::default(),
            config,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Counters collected so far.
    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut SessionStats {
        &mut self.stats
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node.
    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&Node> {
        self.nodes.get(handle.index())
    }

    /// Kind of a node.
    #[must_use]
    pub fn kind_of(&self, handle: Handle) -> Option<Kind> {
        self.get(handle).map(|n| n.kind)
    }

    /// Concrete value denoted by a handle, if it is a literal node.
    #[must_use]
    pub fn literal_of(&self, handle: Handle) -> Option<&Literal> {
        self.get(handle).and_then(Node::literal)
    }

    /// Wrap a concrete value as a node.
    pub fn mk_literal(&mut self, lit: Literal) -> Handle {
        let kind = lit.kind();
        self.intern_node(Node {
            op: NodeOp::Lit(lit),
            args: SmallVec::new(),
            kind,
        })
    }

    /// Build an application node without checking operand kinds.
    ///
    /// Identical `(op, args, kind)` triples always return the same handle.
    /// Callers must guarantee that `kind` is what `op` produces for `args`.
    pub fn intern(&mut self, op: Opcode, args: &[Handle], kind: Kind) -> Handle {
        debug_assert!(args.iter().all(|h| h.index() < self.nodes.len()));
        self.intern_node(Node {
            op: NodeOp::App(op),
            args: SmallVec::from_slice(args),
            kind,
        })
    }

    /// Build an application node, checking handles and operand kinds.
    pub fn mk_app(&mut self, op: Opcode, args: &[Handle]) -> Result<Handle> {
        let kinds = args
            .iter()
            .map(|&h| self.kind_of(h).ok_or(SymstrError::UnknownHandle(h)))
            .collect::<Result<SmallVec<[Kind; 3]>>>()?;
        let kind = op.result_kind(&kinds)?;
        Ok(self.intern(op, args, kind))
    }

    fn intern_node(&mut self, node: Node) -> Handle {
        if let Some(&handle) = self.cache.get(&node) {
            self.stats.cache_hits += 1;
            trace!(%handle, "node cache hit");
            return handle;
        }
        let handle = Handle(self.nodes.len() as u32);
        trace!(%handle, op = ?node.op, kind = ?node.kind, "new node");
        self.cache.insert(node.clone(), handle);
        self.nodes.push(node);
        self.stats.nodes_created += 1;
        handle
    }

    fn push_var(&mut self, name: String, kind: Kind, internal: bool) -> Handle {
        let id = VarId(self.vars.len() as u32);
        let handle = Handle(self.nodes.len() as u32);
        // Variables are never shared, so they bypass the hash-consing table.
        self.nodes.push(Node {
            op: NodeOp::Var(id),
            args: SmallVec::new(),
            kind,
        });
        trace!(%handle, %name, ?kind, internal, "new variable");
        self.vars.push(VarInfo {
            name,
            kind,
            handle,
            internal,
        });
        self.stats.nodes_created += 1;
        self.stats.vars_created += 1;
        handle
    }

    /// Declare a named user variable.
    ///
    /// Every call creates a distinct variable, even for a repeated name.
    pub fn declare(&mut self, name: impl Into<String>, kind: Kind) -> Handle {
        self.push_var(name.into(), kind, false)
    }

    /// Allocate an anonymous user variable.
    ///
    /// The name never repeats the name of an existing variable.
    pub fn fresh_var(&mut self, kind: Kind) -> Handle {
        let name = self.unused_name("");
        self.push_var(name, kind, false)
    }

    /// Allocate a variable owned by the library (hidden from user listings).
    pub fn fresh_internal_var(&mut self, kind: Kind) -> Handle {
        let name = self.unused_name("!");
        self.push_var(name, kind, true)
    }

    fn unused_name(&self, sep: &str) -> String {
        let prefix = &self.config.fresh_prefix;
        (self.vars.len()..)
            .map(|n| format!("{prefix}{sep}{n}"))
            .find(|name| self.vars.iter().all(|v| &v.name != name))
            .unwrap_or_default()
    }

    /// Metadata of a variable.
    #[must_use]
    pub fn var_info(&self, id: VarId) -> Option<&VarInfo> {
        self.vars.get(id.0 as usize)
    }

    /// All variables, in allocation order.
    pub fn vars(&self) -> impl Iterator<Item = &VarInfo> {
        self.vars.iter()
    }

    /// Variables declared or allocated by the user.
    pub fn user_vars(&self) -> impl Iterator<Item = &VarInfo> {
        self.vars.iter().filter(|v| !v.internal)
    }

    fn push_assertion(&mut self, handle: Handle, origin: AssertionOrigin) -> Result<()> {
        match self.kind_of(handle) {
            None => Err(SymstrError::UnknownHandle(handle)),
            Some(Kind::Bool) => {
                trace!(%handle, ?origin, "assert");
                self.assertions.push(Assertion { handle, origin });
                self.stats.assertions += 1;
                Ok(())
            }
            Some(kind) => Err(SymstrError::NonBooleanAssertion(kind)),
        }
    }

    /// Record a boolean handle as a hard constraint.
    pub fn assert(&mut self, handle: Handle) -> Result<()> {
        self.push_assertion(handle, AssertionOrigin::User)
    }

    /// Record a side condition that the caller does not see as a result.
    pub fn assert_internal(&mut self, handle: Handle) -> Result<()> {
        self.push_assertion(handle, AssertionOrigin::Internal)
    }

    /// Record an internal side condition whose kind is known to be Bool.
    pub(crate) fn push_internal_assertion(&mut self, handle: Handle) {
        debug_assert_eq!(self.kind_of(handle), Some(Kind::Bool));
        trace!(%handle, "assert internal");
        self.assertions.push(Assertion {
            handle,
            origin: AssertionOrigin::Internal,
        });
        self.stats.assertions += 1;
    }

    /// Every assertion, user and internal, in recording order.
    #[must_use]
    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    /// Assertions recorded by the host program only.
    pub fn user_assertions(&self) -> impl Iterator<Item = Handle> + '_ {
        self.assertions
            .iter()
            .filter(|a| a.origin == AssertionOrigin::User)
            .map(|a| a.handle)
    }

    /// Result of an earlier emulation of `op` over `args`.
    #[must_use]
    pub fn emulated(&self, op: Opcode, args: &[Handle]) -> Option<Handle> {
        self.emulated.get(&(op, SmallVec::from_slice(args))).copied()
    }

    pub(crate) fn record_emulation(&mut self, op: Opcode, args: &[Handle], result: Handle) {
        self.emulated.insert((op, SmallVec::from_slice(args)), result);
    }

    /// Snapshot the current sizes of the session.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            nodes: self.nodes.len(),
            vars: self.vars.len(),
            assertions: self.assertions.len(),
        }
    }

    /// Discard every node, variable, assertion and emulation created after
    /// `cp`. Handles allocated after the checkpoint become invalid.
    pub fn rollback(&mut self, cp: Checkpoint) {
        for node in self.nodes.drain(cp.nodes..) {
            self.cache.remove(&node);
        }
        self.vars.truncate(cp.vars);
        self.assertions.truncate(cp.assertions);
        self.emulated.retain(|_, h| h.index() < cp.nodes);
        self.stats.rollbacks += 1;
        debug!(nodes = cp.nodes, "rolled back session");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
