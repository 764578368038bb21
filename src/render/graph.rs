//! Configuration handed to the hierarchical graph renderer.
//!
//! Field names serialize in the shape vis-network expects, so the value can
//! be dropped into a page as-is.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Layout direction of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Roots on top
    #[default]
    #[serde(rename = "UD")]
    UpDown,
    /// Roots at the bottom
    #[serde(rename = "DU")]
    DownUp,
    /// Roots on the left
    #[serde(rename = "LR")]
    LeftRight,
    /// Roots on the right
    #[serde(rename = "RL")]
    RightLeft,
}

/// How siblings are ordered within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    /// Follow edge direction (deterministic for a given graph)
    #[default]
    Directed,
    /// Order by node degree
    Hubsize,
}

/// Full renderer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Layout settings
    pub layout: Layout,

    /// Node appearance
    pub nodes: NodeStyle,

    /// Edge appearance
    pub edges: EdgeStyle,

    /// Physics simulation
    pub physics: Physics,

    /// User interaction
    pub interaction: Interaction,

    /// Delay before fitting the view to the graph, in milliseconds
    #[serde(skip)]
    pub fit_delay_ms: u64,
}

/// Layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Hierarchical layout parameters
    pub hierarchical: Hierarchical,
}

/// Hierarchical layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hierarchical {
    /// Direction of the hierarchy
    pub direction: Direction,
    /// Sibling ordering
    pub sort_method: SortMethod,
    /// Distance between levels
    pub level_separation: u32,
    /// Distance between nodes on one level
    pub node_spacing: u32,
    /// Distance between separate trees
    pub tree_spacing: u32,
}

/// Node appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    /// Node shape
    pub shape: String,
    /// Fill and border colors
    pub color: NodeColor,
    /// Label font
    pub font: Font,
    /// Width limits
    pub width_constraint: WidthConstraint,
}

/// Fill and border colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeColor {
    /// Fill color
    pub background: String,
    /// Border color
    pub border: String,
}

/// Label font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Text color
    pub color: String,
    /// Size in pixels
    pub size: u32,
}

/// Width limits for a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidthConstraint {
    /// Maximum width in pixels
    pub maximum: u32,
}

/// Edge appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    /// Line color
    pub color: String,
    /// Curve settings
    pub smooth: Smooth,
}

/// Edge curve settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Smooth {
    /// Curve type
    #[serde(rename = "type")]
    pub kind: String,
    /// Curvature, 0.0 to 1.0
    pub roundness: f64,
}

/// Physics simulation switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    /// Whether nodes are positioned by simulation
    pub enabled: bool,
}

/// User interaction switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    /// Nodes can be dragged
    pub drag_nodes: bool,
    /// Mouse wheel zooms
    pub zoom_view: bool,
    /// The view can be panned
    pub drag_view: bool,
}

impl GraphOptions {
    /// Create the default top-down configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.layout.hierarchical.direction = direction;
        self
    }

    /// Set level, node, and tree spacing.
    pub fn with_spacing(mut self, level: u32, node: u32, tree: u32) -> Self {
        let h = &mut self.layout.hierarchical;
        h.level_separation = level;
        h.node_spacing = node;
        h.tree_spacing = tree;
        self
    }

    /// Enable or disable physics.
    pub fn with_physics(mut self, enabled: bool) -> Self {
        self.physics.enabled = enabled;
        self
    }

    /// Set the delay before fitting the view.
    pub fn with_fit_delay(mut self, ms: u64) -> Self {
        self.fit_delay_ms = ms;
        self
    }

    /// Serialize to the renderer's JSON options object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::Render(format!("graph options serialization error: {}", e)))
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            layout: Layout {
                hierarchical: Hierarchical {
                    direction: Direction::UpDown,
                    sort_method: SortMethod::Directed,
                    level_separation: 150,
                    node_spacing: 200,
                    tree_spacing: 300,
                },
            },
            nodes: NodeStyle {
                shape: "box".to_string(),
                color: NodeColor {
                    background: "#1d1d1d".to_string(),
                    border: "#fff".to_string(),
                },
                font: Font {
                    color: "#fff".to_string(),
                    size: 14,
                },
                width_constraint: WidthConstraint { maximum: 200 },
            },
            edges: EdgeStyle {
                color: "#fff".to_string(),
                smooth: Smooth {
                    kind: "curvedCW".to_string(),
                    roundness: 0.2,
                },
            },
            physics: Physics { enabled: false },
            interaction: Interaction {
                drag_nodes: true,
                zoom_view: true,
                drag_view: true,
            },
            fit_delay_ms: 500,
        }
    }
}
