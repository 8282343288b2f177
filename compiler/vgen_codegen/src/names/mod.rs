//! Collision-free identifier allocation.
//!
//! Every name the generator mints goes through [`NameAllocator`]. A name is
//! keyed by `(NameSpace, stable id)`: asking twice for the same key returns
//! the same name, asking for a different key never returns a name already
//! handed out or a reserved word.

use std::fmt::Write as _;
use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};

/// Verilog keywords plus the language name itself.
pub const RESERVED_WORDS: &[&str] = &[
    "Verilog", "always", "and", "assign", "begin", "buf", "bufif0", "bufif1", "case", "casex",
    "casez", "cmos", "deassign", "default", "defparam", "disable", "edge", "else", "end",
    "endcase", "endfunction", "endmodule", "endprimitive", "endspecify", "endtable", "endtask",
    "event", "for", "force", "forever", "fork", "function", "highz0", "highz1", "if", "ifnone",
    "initial", "inout", "input", "integer", "join", "large", "macromodule", "medium", "module",
    "nand", "negedge", "nmos", "nor", "not", "notif0", "notif1", "or", "output", "parameter",
    "pmos", "posedge", "primitive", "pull0", "pull1", "pulldown", "pullup", "rcmos", "real",
    "realtime", "reg", "release", "repeat", "rnmos", "rpmos", "rtran", "rtranif0", "rtranif1",
    "scalared", "small", "specify", "specparam", "strong0", "strong1", "supply0", "supply1",
    "table", "task", "time", "tran", "tranif0", "tranif1", "tri", "tri0", "tri1", "triand",
    "trior", "trireg", "vectored", "wait", "wand", "weak0", "weak1", "while", "wire", "wor",
    "xnor", "xor",
];

static RESERVED: OnceLock<FxHashSet<&'static str>> = OnceLock::new();

fn reserved_words() -> &'static FxHashSet<&'static str> {
    RESERVED.get_or_init(|| RESERVED_WORDS.iter().copied().collect())
}

/// Whether `name` is a Verilog keyword. Case-sensitive.
pub fn is_keyword(name: &str) -> bool {
    reserved_words().contains(name)
}

/// Identity domain of an allocated name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NameSpace {
    /// Workspace variables, keyed by variable id.
    Variable,
    /// Helper names minted by the generator itself.
    Developer,
}

/// Map from stable identities to legal, distinct names.
#[derive(Clone, Debug, Default)]
pub struct NameAllocator {
    /// Extra reserved words on top of the Verilog keywords.
    extra_reserved: FxHashSet<String>,
    assigned: FxHashMap<(NameSpace, String), String>,
    used: FxHashSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// An allocator that also refuses `words`.
    pub fn with_reserved<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameAllocator {
            extra_reserved: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        is_keyword(name) || self.extra_reserved.contains(name)
    }

    /// The name for `(space, stable_id)`, allocating it from `requested` on first use.
    pub fn allocate(&mut self, space: NameSpace, stable_id: &str, requested: &str) -> String {
        let key = (space, stable_id.to_string());
        if let Some(name) = self.assigned.get(&key) {
            return name.clone();
        }

        let base = safe_name(requested);
        let mut candidate = base.clone();
        let mut suffix = 1u32;
        while self.used.contains(&candidate) || self.is_reserved(&candidate) {
            suffix += 1;
            candidate = format!("{base}{suffix}");
        }

        tracing::debug!(?space, stable_id, name = %candidate, "allocated name");
        self.used.insert(candidate.clone());
        self.assigned.insert(key, candidate.clone());
        candidate
    }

    /// Previously allocated name, without allocating.
    pub fn lookup(&self, space: NameSpace, stable_id: &str) -> Option<&str> {
        self.assigned
            .get(&(space, stable_id.to_string()))
            .map(String::as_str)
    }

    /// Number of names handed out.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Forget every allocation. Extra reserved words stay.
    pub fn reset(&mut self) {
        self.assigned.clear();
        self.used.clear();
    }
}

/// ASCII punctuation that URI encoding leaves as is.
const URI_PUNCTUATION: &str = ";,/?:@&=+$-.!~*'()#";

/// Turn arbitrary user text into a legal identifier.
///
/// Spaces and URI punctuation become `_`. Every other character outside
/// `[A-Za-z0-9_]` is percent-encoded as UTF-8 with `%` turned into `_`, so
/// `"` -> `_22` and `é` -> `_C3_A9`. Empty text becomes `unnamed` and a
/// leading digit gets a `my_` prefix.
pub fn safe_name(requested: &str) -> String {
    if requested.is_empty() {
        return "unnamed".to_string();
    }

    let mut name = String::with_capacity(requested.len());
    for c in requested.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            name.push(c);
        } else if c == ' ' || URI_PUNCTUATION.contains(c) {
            name.push('_');
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(name, "_{byte:02X}");
            }
        }
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, "my_");
    }
    name
}

#[cfg(test)]
mod tests;
