//! Request bodies for the generation endpoints.
//!
//! Each request is an immutable value object: `new` takes the required
//! fields, `with_*` methods set the optional tuning parameters, and any
//! option left unset is omitted from the encoded form entirely so the API
//! applies its own default.

use crate::errors::StabilityError;
use crate::multipart::FormPart;

/// Largest accepted seed value. `0` (or omitting the seed) asks the API to
/// pick a random one.
const MAX_SEED: u32 = 4_294_967_294;

/// Aspect ratio of the generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Ratio16x9,
    Ratio1x1,
    Ratio21x9,
    Ratio2x3,
    Ratio3x2,
    Ratio4x5,
    Ratio5x4,
    Ratio9x16,
    Ratio9x21,
}

impl AspectRatio {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Ratio16x9 => "16:9",
            Self::Ratio1x1 => "1:1",
            Self::Ratio21x9 => "21:9",
            Self::Ratio2x3 => "2:3",
            Self::Ratio3x2 => "3:2",
            Self::Ratio4x5 => "4:5",
            Self::Ratio5x4 => "5:4",
            Self::Ratio9x16 => "9:16",
            Self::Ratio9x21 => "9:21",
        }
    }
}

/// Encoding of the returned image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Webp,
}

impl OutputFormat {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
        }
    }
}

/// Model variant used by the SD3 endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sd3Model {
    Sd3Large,
    Sd3LargeTurbo,
    Sd3Medium,
}

impl Sd3Model {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Sd3Large => "sd3-large",
            Self::Sd3LargeTurbo => "sd3-large-turbo",
            Self::Sd3Medium => "sd3-medium",
        }
    }
}

/// Whether SD3 generates from a prompt alone or transforms a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    TextToImage,
    ImageToImage,
}

impl GenerationMode {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::TextToImage => "text-to-image",
            Self::ImageToImage => "image-to-image",
        }
    }
}

/// Request body for `/v2beta/stable-image/generate/ultra`.
///
/// # Example
///
/// ```
/// use stability_rs::{AspectRatio, OutputFormat, UltraRequest};
///
/// let request = UltraRequest::new("a lighthouse on a cliff at dusk")
///     .with_aspect_ratio(AspectRatio::Ratio16x9)
///     .with_output_format(OutputFormat::Png);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UltraRequest {
    prompt: String,
    negative_prompt: Option<String>,
    aspect_ratio: Option<AspectRatio>,
    seed: Option<u32>,
    output_format: Option<OutputFormat>,
}

impl UltraRequest {
    /// Creates a request with the given prompt and no optional parameters.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: None,
            aspect_ratio: None,
            seed: None,
            output_format: None,
        }
    }

    /// Keywords of what you do not wish to see in the output image.
    #[must_use]
    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    #[must_use]
    pub const fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    /// Guides the randomness of the generation.
    /// Possible values: `[ 0 .. 4294967294 ]`; `0` means a random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = Some(output_format);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), StabilityError> {
        if self.prompt.is_empty() {
            return Err(StabilityError::InvalidInput(
                "prompt must not be empty".to_string(),
            ));
        }
        validate_seed(self.seed)
    }

    pub(crate) fn into_form_parts(self) -> Vec<FormPart> {
        let mut parts = vec![FormPart::Text {
            name: "prompt",
            value: self.prompt,
        }];
        push_text_opt(&mut parts, "negative_prompt", self.negative_prompt);
        push_text_opt(
            &mut parts,
            "aspect_ratio",
            self.aspect_ratio.map(|r| r.as_str().to_string()),
        );
        push_text_opt(&mut parts, "seed", self.seed.map(|s| s.to_string()));
        push_text_opt(
            &mut parts,
            "output_format",
            self.output_format.map(|f| f.as_str().to_string()),
        );
        parts
    }
}

/// Request body for `/v2beta/stable-image/generate/sd3`.
///
/// Defaults to text-to-image. For image-to-image, supply a source image and
/// a `strength`; the API requires both together.
///
/// # Example
///
/// ```
/// use stability_rs::{GenerationMode, Sd3Model, Sd3Request};
///
/// let request = Sd3Request::new("the same scene, in winter")
///     .with_model(Sd3Model::Sd3LargeTurbo)
///     .with_mode(GenerationMode::ImageToImage)
///     .with_image(vec![0xFF, 0xD8, 0xFF])
///     .with_strength(0.6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sd3Request {
    prompt: String,
    negative_prompt: Option<String>,
    aspect_ratio: Option<AspectRatio>,
    seed: Option<u32>,
    output_format: Option<OutputFormat>,
    model: Option<Sd3Model>,
    mode: Option<GenerationMode>,
    image: Option<Vec<u8>>,
    strength: Option<f64>,
}

impl Sd3Request {
    /// Creates a request with the given prompt and no optional parameters.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: None,
            aspect_ratio: None,
            seed: None,
            output_format: None,
            model: None,
            mode: None,
            image: None,
            strength: None,
        }
    }

    /// Keywords of what you do not wish to see in the output image.
    #[must_use]
    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    /// Only applies to text-to-image; image-to-image output keeps the source
    /// image's dimensions.
    #[must_use]
    pub const fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    /// Guides the randomness of the generation.
    /// Possible values: `[ 0 .. 4294967294 ]`; `0` means a random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = Some(output_format);
        self
    }

    #[must_use]
    pub const fn with_model(mut self, model: Sd3Model) -> Self {
        self.model = Some(model);
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Source image for image-to-image generation, as JPEG bytes.
    #[must_use]
    pub fn with_image(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }

    /// How much the source image influences the output.
    /// Possible values: `[ 0.0 .. 1.0 ]`, where `0` yields an image almost
    /// identical to the source. Required whenever an image is supplied.
    #[must_use]
    pub const fn with_strength(mut self, strength: f64) -> Self {
        self.strength = Some(strength);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), StabilityError> {
        if self.prompt.is_empty() {
            return Err(StabilityError::InvalidInput(
                "prompt must not be empty".to_string(),
            ));
        }
        validate_seed(self.seed)?;
        if let Some(image) = &self.image {
            if image.is_empty() {
                return Err(StabilityError::InvalidInput(
                    "image must not be empty".to_string(),
                ));
            }
            if self.strength.is_none() {
                return Err(StabilityError::InvalidInput(
                    "strength is required when an image is supplied".to_string(),
                ));
            }
        }
        if self.mode == Some(GenerationMode::ImageToImage) && self.image.is_none() {
            return Err(StabilityError::InvalidInput(
                "image-to-image mode requires a source image".to_string(),
            ));
        }
        if let Some(strength) = self.strength
            && !(0.0..=1.0).contains(&strength)
        {
            return Err(StabilityError::InvalidInput(format!(
                "strength must be within [0.0, 1.0], got {strength}"
            )));
        }
        Ok(())
    }

    pub(crate) fn into_form_parts(self) -> Vec<FormPart> {
        let mut parts = vec![FormPart::Text {
            name: "prompt",
            value: self.prompt,
        }];
        if let Some(image) = self.image {
            parts.push(FormPart::File {
                name: "image",
                filename: "image.jpg",
                mime: "image/jpeg",
                bytes: image,
            });
        }
        push_text_opt(
            &mut parts,
            "strength",
            self.strength.map(|s| s.to_string()),
        );
        push_text_opt(&mut parts, "negative_prompt", self.negative_prompt);
        push_text_opt(
            &mut parts,
            "aspect_ratio",
            self.aspect_ratio.map(|r| r.as_str().to_string()),
        );
        push_text_opt(&mut parts, "seed", self.seed.map(|s| s.to_string()));
        push_text_opt(
            &mut parts,
            "output_format",
            self.output_format.map(|f| f.as_str().to_string()),
        );
        push_text_opt(
            &mut parts,
            "model",
            self.model.map(|m| m.as_str().to_string()),
        );
        push_text_opt(
            &mut parts,
            "mode",
            self.mode.map(|m| m.as_str().to_string()),
        );
        parts
    }
}

/// Request body for `/v2beta/image-to-video`.
///
/// The source image must be JPEG, in one of the supported dimensions:
/// 1024x576, 576x1024, or 768x768.
///
/// # Example
///
/// ```
/// use stability_rs::ImageToVideoRequest;
///
/// let request = ImageToVideoRequest::new(vec![0xFF, 0xD8, 0xFF])
///     .with_cfg_scale(2.5)
///     .with_motion_bucket_id(180);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ImageToVideoRequest {
    image: Vec<u8>,
    cfg_scale: Option<f64>,
    motion_bucket_id: Option<u16>,
    seed: Option<u32>,
}

impl ImageToVideoRequest {
    /// Creates a request around the source image, leaving every tuning
    /// parameter to the API's defaults.
    #[must_use]
    pub const fn new(image: Vec<u8>) -> Self {
        Self {
            image,
            cfg_scale: None,
            motion_bucket_id: None,
            seed: None,
        }
    }

    /// How strongly the video sticks to the source image. Lower values give
    /// the model more freedom; higher values correct motion distortions.
    /// Possible values: `[ 0.0 .. 10.0 ]`. Default: `1.8`.
    #[must_use]
    pub const fn with_cfg_scale(mut self, cfg_scale: f64) -> Self {
        self.cfg_scale = Some(cfg_scale);
        self
    }

    /// Lower values generally result in less motion in the output video,
    /// higher values in more.
    /// Possible values: `[ 1 .. 255 ]`. Default: `127`.
    #[must_use]
    pub const fn with_motion_bucket_id(mut self, motion_bucket_id: u16) -> Self {
        self.motion_bucket_id = Some(motion_bucket_id);
        self
    }

    /// Guides the randomness of the generation.
    /// Possible values: `[ 0 .. 4294967294 ]`; `0` means a random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), StabilityError> {
        if self.image.is_empty() {
            return Err(StabilityError::InvalidInput(
                "image must not be empty".to_string(),
            ));
        }
        if let Some(cfg_scale) = self.cfg_scale
            && !(0.0..=10.0).contains(&cfg_scale)
        {
            return Err(StabilityError::InvalidInput(format!(
                "cfg_scale must be within [0.0, 10.0], got {cfg_scale}"
            )));
        }
        if let Some(motion_bucket_id) = self.motion_bucket_id
            && !(1..=255).contains(&motion_bucket_id)
        {
            return Err(StabilityError::InvalidInput(format!(
                "motion_bucket_id must be within [1, 255], got {motion_bucket_id}"
            )));
        }
        validate_seed(self.seed)
    }

    pub(crate) fn into_form_parts(self) -> Vec<FormPart> {
        let mut parts = vec![FormPart::File {
            name: "image",
            filename: "image.jpg",
            mime: "image/jpeg",
            bytes: self.image,
        }];
        push_text_opt(
            &mut parts,
            "cfg_scale",
            self.cfg_scale.map(|c| c.to_string()),
        );
        push_text_opt(
            &mut parts,
            "motion_bucket_id",
            self.motion_bucket_id.map(|m| m.to_string()),
        );
        push_text_opt(&mut parts, "seed", self.seed.map(|s| s.to_string()));
        parts
    }
}

fn push_text_opt(parts: &mut Vec<FormPart>, name: &'static str, value: Option<String>) {
    if let Some(value) = value {
        parts.push(FormPart::Text { name, value });
    }
}

fn validate_seed(seed: Option<u32>) -> Result<(), StabilityError> {
    if let Some(seed) = seed
        && seed > MAX_SEED
    {
        return Err(StabilityError::InvalidInput(format!(
            "seed must be within [0, {MAX_SEED}], got {seed}"
        )));
    }
    Ok(())
}
