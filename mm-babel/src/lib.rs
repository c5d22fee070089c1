//! Multi-format conversion for FreeMind mind maps
//!
//!     This crate turns hierarchical outline documents (mind maps: a root
//!     node with nested children carrying text, icons, links and creation
//!     timestamps) into flat, structured documents: outline markup
//!     (Markdown / Textile), meeting minutes with semantic section
//!     classification, and S5 slide decks.
//!
//!     This is a pure lib, that is, it powers the mm-cli but is shell
//!     agnostic: no code here supposes a shell environment, be it to std
//!     print, env vars etc. The engine never opens configuration stores
//!     and only [`publish`] touches the filesystem.
//!
//! Architecture
//!
//!     The core is the tree-to-document transformation: recursive
//!     interpretation of the node tree into format-specific output lines.
//!     Everything hangs off a small set of leaves:
//!
//!     .
//!     ├── error.rs                # FormatError taxonomy
//!     ├── tree.rs                 # Node / MindMap model, reserved markers, depth guard
//!     ├── attributes.rs           # icons resolved once into typed NodeFlags
//!     ├── meta.rs                 # __meta__ extraction into DocumentMeta
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── freemind            # .mm XML → MindMap (the only inbound format)
//!     │   ├── outline             # depth-rule Markdown / Textile emitter
//!     │   ├── notes               # minutes classifier and renderer
//!     │   └── slides              # S5 deck emitter
//!     ├── publish.rs              # registry + file output + blog front matter
//!     └── lib.rs
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait:
//!     formats have a parse() and/or serialize() method, a name and file
//!     extensions. See the trait def [./format.rs]. Every serializer
//!     produces an ordered sequence of lines joined with a configurable
//!     separator; none of them reads files.
//!
//! Testing
//!     tests
//!     ├── common                  # shared tree builders
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories,
//!     so we need to include these in the mod.

pub mod attributes;
pub mod error;
pub mod format;
pub mod formats;
pub mod meta;
pub mod publish;
pub mod registry;
pub mod tree;

pub use attributes::NodeFlags;
pub use error::FormatError;
pub use format::{Format, LINE_SEPARATOR_OPTION};
pub use meta::DocumentMeta;
pub use publish::{publish, FrontMatter, PublishArtifact, PublishResult, PublishSpec};
pub use registry::FormatRegistry;
pub use tree::{IconKind, MindMap, Node, MAX_DEPTH, META_MARKER, TABLE_MARKER};
