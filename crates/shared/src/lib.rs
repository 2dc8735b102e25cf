use serde::{Deserialize, Serialize};

mod dimensions;
mod fit;

pub use dimensions::{Axis, ParseError, MAX_EXTENT};
pub use fit::{classify, Fit};

/// Уникальный идентификатор трафарета в сцене
pub type StencilId = String;

fn default_extent() -> f64 {
    50.0
}

/// Размеры коробки (длина по X, ширина по Y, высота по Z)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for BoxDimensions {
    fn default() -> Self {
        Self {
            length: default_extent(),
            width: default_extent(),
            height: default_extent(),
        }
    }
}

impl BoxDimensions {
    /// Build validated dimensions; every extent must be a positive finite number.
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self, ParseError> {
        let dims = Self {
            length,
            width,
            height,
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Extents as `[length, width, height]`
    pub fn extents(&self) -> [f64; 3] {
        [self.length, self.width, self.height]
    }

    /// Length of the main diagonal
    pub fn diagonal(&self) -> f64 {
        (self.length * self.length + self.width * self.width + self.height * self.height).sqrt()
    }

    /// Center point of the box
    pub fn center(&self) -> [f64; 3] {
        [self.length * 0.5, self.width * 0.5, self.height * 0.5]
    }
}

/// Параметры нового трафарета (без идентификатора)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StencilSpec {
    /// Угол-начало (x, y, z)
    pub position: [f64; 3],
    /// Размеры (length, width, height)
    pub dimensions: [f64; 3],
}

/// Трафарет, размещённый в коробке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stencil {
    pub id: StencilId,
    pub position: [f64; 3],
    pub dimensions: [f64; 3],
}

impl Stencil {
    pub fn from_spec(id: StencilId, spec: StencilSpec) -> Self {
        Self {
            id,
            position: spec.position,
            dimensions: spec.dimensions,
        }
    }

    /// Corner opposite to the origin: `position + dimensions`
    pub fn far_corner(&self) -> [f64; 3] {
        [
            self.position[0] + self.dimensions[0],
            self.position[1] + self.dimensions[1],
            self.position[2] + self.dimensions[2],
        ]
    }
}

/// Сцена: одна коробка и список трафаретов в порядке добавления
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub box_dimensions: BoxDimensions,
    #[serde(default)]
    pub stencils: Vec<Stencil>,
}

/// Файл конфигурации коробки. Неизвестные ключи игнорируются.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoxConfig {
    #[serde(default)]
    pub box_dimensions: Option<BoxDimensions>,
}
