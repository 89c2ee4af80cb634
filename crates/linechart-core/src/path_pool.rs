// File: crates/linechart-core/src/path_pool.rs
// Summary: Frame-scoped arena of reusable Skia paths; rewound between frames, never freed.

use skia_safe as skia;

/// Handle to a pooled path. Valid only until the next `reset_for_new_frame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathId(usize);

/// Pool of mutable `Path` buffers reused across frames so the draw loop
/// allocates nothing in steady state. The pool grows to the high-water mark
/// of paths needed in one frame and never shrinks.
#[derive(Default)]
pub struct PathPool {
    paths: Vec<skia::Path>,
    issued: usize,
}

impl PathPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next pooled path, guaranteed empty of prior geometry.
    /// Grows the pool when every existing path is already issued this frame.
    pub fn acquire(&mut self) -> PathId {
        if self.issued == self.paths.len() {
            self.paths.push(skia::Path::new());
        }
        let id = PathId(self.issued);
        self.issued += 1;
        id
    }

    pub fn get(&self, id: PathId) -> &skia::Path {
        &self.paths[id.0]
    }

    pub fn get_mut(&mut self, id: PathId) -> &mut skia::Path {
        &mut self.paths[id.0]
    }

    /// Rewind every path issued so far (keeps verb storage) and restart the
    /// issue cursor, so the next frame's first `acquire` reuses path #0.
    /// No `PathId` may be kept across this call.
    pub fn reset_for_new_frame(&mut self) {
        for path in &mut self.paths[..self.issued] {
            path.rewind();
        }
        self.issued = 0;
    }

    /// Number of paths handed out since the last reset.
    pub fn issued(&self) -> usize {
        self.issued
    }
}
