//! Display modes and the transition state machine.
//!
//! [`DisplayModeController`] owns the active display mode, the active UV
//! channel, the wireframe toggle, and the checker tiling multiplier. Every
//! mode transition resets the camera rig and rebuilds the
//! [`RenderBinding`] from scratch, so a frame drawn after a transition can
//! never observe a half-updated combination of mode and parameters.

use larkspur_core::mesh::layout::MAX_UV_CHANNELS;
use larkspur_core::{MeshData, VertexSemantic};

use crate::menu::{MenuItem, MenuModel};
use crate::preview::binding::{
    BoundTexture, CHECKER_TILING_RANGE, DEFAULT_CHECKER_TILING, PreviewMaterial, RenderBinding,
};
use crate::preview::camera::CameraRig;

/// The selectable preview display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Lit geometry with the standard material.
    Shaded,
    /// Checker pattern sampled through the active UV channel.
    UvChecker,
    /// 2D UV-space layout with the reference grid.
    FlatUv,
    /// Vertex colors as surface color.
    VertexColor,
    /// Normals as surface color.
    Normals,
    /// Tangents as surface color.
    Tangents,
}

impl DisplayMode {
    /// All modes in menu order.
    pub const ALL: [DisplayMode; 6] = [
        DisplayMode::Shaded,
        DisplayMode::UvChecker,
        DisplayMode::FlatUv,
        DisplayMode::VertexColor,
        DisplayMode::Normals,
        DisplayMode::Tangents,
    ];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shaded => "Shaded",
            Self::UvChecker => "UV Checker",
            Self::FlatUv => "Flat UV",
            Self::VertexColor => "Vertex Color",
            Self::Normals => "Normals",
            Self::Tangents => "Tangents",
        }
    }

    /// Position in [`DisplayMode::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|mode| mode == self).unwrap_or(0)
    }

    /// Mode from a menu index.
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Whether the active UV channel feeds this mode's shading.
    pub fn uses_uv_channel(&self) -> bool {
        matches!(self, Self::FlatUv | Self::UvChecker)
    }

    /// The vertex attribute this mode visualizes, if it requires one.
    pub fn required_attribute(&self) -> Option<VertexSemantic> {
        match self {
            Self::VertexColor => Some(VertexSemantic::Color),
            Self::Normals => Some(VertexSemantic::Normal),
            Self::Tangents => Some(VertexSemantic::Tangent),
            Self::Shaded | Self::UvChecker | Self::FlatUv => None,
        }
    }
}

/// Which modes and UV channels the active mesh supports.
///
/// Derived once when the inspected mesh is (re)loaded, not per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeAvailability {
    modes: [bool; DisplayMode::ALL.len()],
    uv_channels: [bool; MAX_UV_CHANNELS],
}

impl ModeAvailability {
    /// Everything available (used when no mesh is loaded).
    pub fn all() -> Self {
        Self {
            modes: [true; DisplayMode::ALL.len()],
            uv_channels: [true; MAX_UV_CHANNELS],
        }
    }

    /// Derive availability from a mesh's attribute set.
    pub fn from_mesh(mesh: Option<&MeshData>) -> Self {
        let mut availability = Self::all();
        let Some(mesh) = mesh else {
            return availability;
        };

        for mode in DisplayMode::ALL {
            if let Some(required) = mode.required_attribute() {
                availability.modes[mode.index()] = mesh.has_attribute(required);
            }
        }
        for (channel, available) in availability.uv_channels.iter_mut().enumerate() {
            *available = mesh.has_uv_channel(channel);
        }
        availability
    }

    /// Whether a mode is available.
    pub fn mode(&self, mode: DisplayMode) -> bool {
        self.modes[mode.index()]
    }

    /// Whether a UV channel is available. Out-of-range channels are not.
    pub fn uv_channel(&self, channel: usize) -> bool {
        self.uv_channels.get(channel).copied().unwrap_or(false)
    }
}

impl Default for ModeAvailability {
    fn default() -> Self {
        Self::all()
    }
}

/// State machine over [`DisplayMode`].
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModeController {
    mode: DisplayMode,
    uv_channel: usize,
    draw_wire: bool,
    checker_tiling: u32,
    availability: ModeAvailability,
    binding: RenderBinding,
}

impl DisplayModeController {
    /// A controller in the default state: shaded mode, channel 0, wireframe
    /// on, everything available.
    pub fn new() -> Self {
        Self {
            mode: DisplayMode::Shaded,
            uv_channel: 0,
            draw_wire: true,
            checker_tiling: DEFAULT_CHECKER_TILING,
            availability: ModeAvailability::all(),
            binding: RenderBinding::shaded(),
        }
    }

    /// The active display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The active UV channel.
    pub fn uv_channel(&self) -> usize {
        self.uv_channel
    }

    /// Whether the wireframe overlay is requested.
    pub fn wireframe_enabled(&self) -> bool {
        self.draw_wire
    }

    /// Toggle the wireframe overlay. Flat-UV mode ignores the flag and
    /// always draws its UV wireframe.
    pub fn set_wireframe(&mut self, enabled: bool) {
        self.draw_wire = enabled;
    }

    /// The checker tiling multiplier.
    pub fn checker_tiling(&self) -> u32 {
        self.checker_tiling
    }

    /// Set the checker tiling multiplier, clamped to 1..=30. Rebinds the
    /// texture scale immediately when the checker is on screen.
    pub fn set_checker_tiling(&mut self, tiling: u32) {
        self.checker_tiling = tiling.clamp(*CHECKER_TILING_RANGE.start(), *CHECKER_TILING_RANGE.end());
        if self.mode == DisplayMode::UvChecker {
            self.binding.texture_scale = self.checker_tiling;
        }
    }

    /// Mode/channel availability for the active mesh.
    pub fn availability(&self) -> &ModeAvailability {
        &self.availability
    }

    /// Recompute availability for a newly loaded mesh.
    pub fn reload_mesh(&mut self, mesh: Option<&MeshData>) {
        self.availability = ModeAvailability::from_mesh(mesh);
    }

    /// The active render binding.
    pub fn binding(&self) -> &RenderBinding {
        &self.binding
    }

    /// Transition to a display mode.
    ///
    /// Every transition, including into the current mode:
    /// 1. resets the camera rig (orthographic default when entering flat
    ///    UV, orbit default otherwise),
    /// 2. resets the active UV channel to 0 and re-enables the wireframe
    ///    overlay,
    /// 3. rebuilds the render binding for the target mode with the
    ///    UV-channel parameter cleared.
    pub fn set_mode(&mut self, mode: DisplayMode, rig: &mut CameraRig) {
        if mode == DisplayMode::FlatUv {
            rig.reset_ortho();
        } else {
            rig.reset_orbit();
        }

        self.uv_channel = 0;
        self.draw_wire = true;
        self.mode = mode;
        self.binding = self.build_binding(mode);

        log::debug!("preview display mode -> {}", mode.label());
    }

    /// Transition by menu index; out-of-range indices are ignored.
    pub fn set_mode_index(&mut self, index: i32, rig: &mut CameraRig) {
        if let Some(mode) = DisplayMode::from_index(index) {
            self.set_mode(mode, rig);
        }
    }

    /// Select the active UV channel by menu index.
    ///
    /// Out-of-range indices and channels the active mesh does not carry
    /// are ignored. The value is always stored; the binding parameter only
    /// follows it in modes that sample UVs, so the selection is inert
    /// elsewhere.
    pub fn set_uv_channel(&mut self, channel: i32) {
        let Ok(channel) = usize::try_from(channel) else {
            return;
        };
        if channel >= MAX_UV_CHANNELS || !self.availability.uv_channel(channel) {
            return;
        }

        self.uv_channel = channel;
        if self.mode.uses_uv_channel() {
            self.binding.uv_channel_param = channel as i32;
        }
    }

    /// Menu model for the display-mode popup.
    pub fn mode_menu(&self) -> MenuModel {
        MenuModel {
            items: DisplayMode::ALL
                .iter()
                .map(|mode| MenuItem {
                    label: mode.label().to_string(),
                    enabled: self.availability.mode(*mode),
                    selected: *mode == self.mode,
                })
                .collect(),
        }
    }

    /// Menu model for the UV-channel popup.
    pub fn uv_channel_menu(&self) -> MenuModel {
        MenuModel {
            items: (0..MAX_UV_CHANNELS)
                .map(|channel| MenuItem {
                    label: format!("Channel {channel}"),
                    enabled: self.availability.uv_channel(channel),
                    selected: channel == self.uv_channel,
                })
                .collect(),
        }
    }

    fn build_binding(&self, mode: DisplayMode) -> RenderBinding {
        let mut binding = RenderBinding {
            material: PreviewMaterial::MultiPreview,
            mode_param: 0,
            uv_channel_param: 0,
            texture: BoundTexture::None,
            texture_scale: self.checker_tiling,
        };
        match mode {
            DisplayMode::Shaded => {
                binding.material = PreviewMaterial::Shaded;
            }
            DisplayMode::UvChecker => {
                binding.mode_param = 4;
                binding.texture = BoundTexture::Checker;
            }
            DisplayMode::FlatUv => {
                binding.mode_param = 0;
            }
            DisplayMode::VertexColor => {
                binding.mode_param = 1;
            }
            DisplayMode::Normals => {
                binding.mode_param = 2;
            }
            DisplayMode::Tangents => {
                binding.mode_param = 3;
            }
        }
        binding
    }
}

impl Default for DisplayModeController {
    fn default() -> Self {
        Self::new()
    }
}
