//! Shared preview resources.
//!
//! The checker texture and the interactive preview surface are reused
//! across inspector instances so inspecting many meshes in sequence does
//! not churn GPU resources. The pool counts acquisitions; the last release
//! destroys the resources through the renderer and asks it to clean up.
//! Lifecycle is explicit so it stays testable: tickets must be handed back
//! via [`PreviewResourcePool::release`], and a ticket dropped without
//! release only logs a warning because the pool has no renderer to destroy
//! through at that point.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::error::InspectorError;
use crate::renderer::{SceneRenderer, SurfaceId, TextureDescriptor, TextureId};

/// Checker texture edge length in pixels.
const CHECKER_SIZE: u32 = 64;
/// Checker cell edge length in pixels.
const CHECKER_CELL: u32 = 8;

#[derive(Debug, Default)]
struct PoolState {
    refcount: u32,
    checker: Option<TextureId>,
    surface: Option<SurfaceId>,
    surface_size: (u32, u32),
}

/// Reference-counted pool of renderer resources shared by all inspector
/// panels in the process.
#[derive(Debug, Default)]
pub struct PreviewResourcePool {
    state: Mutex<PoolState>,
}

/// Proof of an acquisition; hand it back via
/// [`PreviewResourcePool::release`].
#[derive(Debug)]
pub struct PoolTicket {
    released: bool,
}

impl Drop for PoolTicket {
    fn drop(&mut self) {
        if !self.released {
            log::warn!("preview resource ticket dropped without release; GPU resources may leak");
        }
    }
}

impl PreviewResourcePool {
    /// An empty pool. Tests use private pools; panels default to
    /// [`PreviewResourcePool::global`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide pool.
    pub fn global() -> Arc<PreviewResourcePool> {
        static POOL: OnceLock<Arc<PreviewResourcePool>> = OnceLock::new();
        POOL.get_or_init(|| Arc::new(PreviewResourcePool::new())).clone()
    }

    /// Acquire a reference to the shared resources, creating the checker
    /// texture on first acquisition.
    pub fn acquire<R: SceneRenderer + ?Sized>(
        &self,
        renderer: &mut R,
    ) -> Result<PoolTicket, InspectorError> {
        let mut state = self.state.lock();
        if state.refcount == 0 && state.checker.is_none() {
            let checker = renderer.create_texture(&checker_texture())?;
            log::debug!("preview pool: created checker texture {checker:?}");
            state.checker = Some(checker);
        }
        state.refcount += 1;
        Ok(PoolTicket { released: false })
    }

    /// Release a reference. The last release destroys pooled resources and
    /// calls the renderer's cleanup.
    pub fn release<R: SceneRenderer + ?Sized>(&self, renderer: &mut R, mut ticket: PoolTicket) {
        ticket.released = true;
        let mut state = self.state.lock();
        state.refcount = state.refcount.saturating_sub(1);
        if state.refcount > 0 {
            return;
        }

        if let Some(checker) = state.checker.take() {
            renderer.destroy_texture(checker);
        }
        if let Some(surface) = state.surface.take() {
            renderer.destroy_surface(surface);
        }
        state.surface_size = (0, 0);
        renderer.cleanup();
        log::debug!("preview pool: released shared resources");
    }

    /// The shared checker texture, if created.
    pub fn checker(&self) -> Option<TextureId> {
        self.state.lock().checker
    }

    /// The shared interactive surface, if created.
    pub fn surface(&self) -> Option<SurfaceId> {
        self.state.lock().surface
    }

    /// Size of the shared interactive surface in pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        self.state.lock().surface_size
    }

    /// Get the shared surface at the requested size, recreating it only
    /// when the size changed.
    pub fn ensure_surface<R: SceneRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        width: u32,
        height: u32,
    ) -> Result<SurfaceId, InspectorError> {
        let width = width.max(1);
        let height = height.max(1);

        let mut state = self.state.lock();
        if let Some(surface) = state.surface {
            if state.surface_size == (width, height) {
                return Ok(surface);
            }
            renderer.destroy_surface(surface);
        }

        let surface = renderer.create_offscreen_surface(width, height)?;
        state.surface = Some(surface);
        state.surface_size = (width, height);
        Ok(surface)
    }

    /// Current number of live acquisitions.
    pub fn refcount(&self) -> u32 {
        self.state.lock().refcount
    }
}

static_assertions::assert_impl_all!(PreviewResourcePool: Send, Sync);

/// The procedural two-tone checker pattern.
fn checker_texture() -> TextureDescriptor {
    let mut pixels = Vec::with_capacity((CHECKER_SIZE * CHECKER_SIZE * 4) as usize);
    for y in 0..CHECKER_SIZE {
        for x in 0..CHECKER_SIZE {
            let even = ((x / CHECKER_CELL) + (y / CHECKER_CELL)) % 2 == 0;
            let tone = if even { 0x80 } else { 0xff };
            pixels.extend_from_slice(&[tone, tone, tone, 0xff]);
        }
    }
    TextureDescriptor {
        width: CHECKER_SIZE,
        height: CHECKER_SIZE,
        pixels,
        label: Some("preview_checker".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{RecordingRenderer, RenderCommand};

    #[test]
    fn acquisitions_share_resources() {
        let pool = PreviewResourcePool::new();
        let mut renderer = RecordingRenderer::new();

        let first = pool.acquire(&mut renderer).unwrap();
        let checker = pool.checker().unwrap();
        let second = pool.acquire(&mut renderer).unwrap();
        assert_eq!(pool.checker(), Some(checker));
        assert_eq!(pool.refcount(), 2);

        pool.release(&mut renderer, first);
        assert_eq!(pool.checker(), Some(checker), "resources outlive one panel");

        pool.release(&mut renderer, second);
        assert_eq!(pool.checker(), None);
        assert!(
            renderer
                .commands()
                .iter()
                .any(|command| matches!(command, RenderCommand::Cleanup))
        );
    }

    #[test]
    fn surface_recreated_only_on_resize() {
        let pool = PreviewResourcePool::new();
        let mut renderer = RecordingRenderer::new();
        let ticket = pool.acquire(&mut renderer).unwrap();

        let surface = pool.ensure_surface(&mut renderer, 128, 64).unwrap();
        assert_eq!(pool.ensure_surface(&mut renderer, 128, 64).unwrap(), surface);

        let resized = pool.ensure_surface(&mut renderer, 256, 64).unwrap();
        assert_ne!(resized, surface);
        assert_eq!(pool.surface_size(), (256, 64));

        pool.release(&mut renderer, ticket);
        assert_eq!(pool.surface(), None);
    }

    #[test]
    fn degenerate_surface_sizes_are_clamped() {
        let pool = PreviewResourcePool::new();
        let mut renderer = RecordingRenderer::new();
        let ticket = pool.acquire(&mut renderer).unwrap();

        pool.ensure_surface(&mut renderer, 0, 0).unwrap();
        assert_eq!(pool.surface_size(), (1, 1));
        pool.release(&mut renderer, ticket);
    }

    #[test]
    fn checker_pattern_is_well_formed() {
        let desc = checker_texture();
        assert_eq!(desc.pixels.len(), (desc.width * desc.height * 4) as usize);
    }
}
