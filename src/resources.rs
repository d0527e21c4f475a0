//! The resource-scope stack: name-keyed access to fonts, XObjects, and
//! extended-graphics-state dictionaries for the currently executing
//! (sub-)stream (spec §3, §4.5).

use std::collections::HashMap;
use std::sync::Arc;

use crate::font::Font;
use crate::matrix::Matrix;
use crate::object::Operand;
use crate::token::StreamTokenIterator;

/// An extended-graphics-state dictionary. Contents are opaque PDF objects
/// (spec §1: pixel-affecting graphics-state parameters are out of scope);
/// the Engine only needs to be able to look one up by name.
pub type ExtGState = HashMap<String, Operand>;

/// A named XObject: either a Form (a reusable content stream, inheriting
/// CTM and pushing its own resource scope) or an Image (not interpretable
/// as a content stream).
///
/// `Clone` (via `Arc` for the `open` closure) so `Engine::xobjects()` can
/// hand callers an owned snapshot of the current scope's map, mirroring
/// `Engine::fonts()`.
#[derive(Clone)]
pub enum XObject {
    Form {
        matrix: Matrix,
        resources: Option<Arc<dyn ResourceScope>>,
        /// Produces a fresh token iterator over the form's content stream
        /// each time it is invoked (a Form may be invoked by `Do` more
        /// than once).
        open: Arc<dyn Fn() -> Box<dyn StreamTokenIterator> + Send + Sync>,
    },
    Image,
}

/// Name-keyed resource lookup for one (sub-)stream.
///
/// Each scope belongs to the call that pushed it onto the Engine's
/// resource-scope stack; popping releases it (spec §3, §4.5, §5).
pub trait ResourceScope: Send + Sync {
    fn fonts(&self) -> &HashMap<String, Arc<dyn Font>>;
    fn xobjects(&self) -> &HashMap<String, XObject>;
    fn ext_gstates(&self) -> &HashMap<String, ExtGState>;
}

/// A plain in-memory `ResourceScope`, sufficient for sub-streams built by
/// this crate's own `Do`/Type-3 handling and for tests.
#[derive(Default)]
pub struct MapResourceScope {
    pub fonts: HashMap<String, Arc<dyn Font>>,
    pub xobjects: HashMap<String, XObject>,
    pub ext_gstates: HashMap<String, ExtGState>,
}

impl ResourceScope for MapResourceScope {
    fn fonts(&self) -> &HashMap<String, Arc<dyn Font>> {
        &self.fonts
    }

    fn xobjects(&self) -> &HashMap<String, XObject> {
        &self.xobjects
    }

    fn ext_gstates(&self) -> &HashMap<String, ExtGState> {
        &self.ext_gstates
    }
}
