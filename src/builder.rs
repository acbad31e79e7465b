//! Fluent URL builder
//!
//! ```
//! use rezizer::UrlBuilder;
//!
//! let mut url = UrlBuilder::new("http://img.example.com");
//! url.resize(300, 200)?.fit_in().with("path/to/image.jpg");
//!
//! assert_eq!(url.generate(), "http://img.example.com/200x300/fit-in/path/to/image.jpg");
//! # Ok::<(), rezizer::RezizerError>(())
//! ```
//!
//! The generated URL has the shape
//! `<server_url>/[<signature>/]<path>/<image>`; the signature segment is only
//! present when the builder was created with a secret.

use std::fmt;

use crate::config::RezizerConfig;
use crate::constants::DEFAULT_OVERLAY_ALIGN;
use crate::encoder;
use crate::error::RezizerError;
use crate::operations::{sanitize, Dispatch, Number, OperationSet, OperationValue};
use crate::signer;

/// Accumulates operations for one image and renders the final URL
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    server_url: String,
    secret: Option<String>,
    operations: OperationSet,
    raw_image_url: Option<String>,
}

macro_rules! flag_operations {
    ($($(#[$doc:meta])* $method:ident => $name:literal;)*) => {
        $(
            $(#[$doc])*
            pub fn $method(&mut self) -> &mut Self {
                self.record(Dispatch::Flag($name), &[] as &[&str])
            }
        )*
    };
}

macro_rules! argument_operations {
    ($($(#[$doc:meta])* $method:ident => $name:literal;)*) => {
        $(
            $(#[$doc])*
            pub fn $method(&mut self, value: impl fmt::Display) -> &mut Self {
                self.record(Dispatch::Argument($name), &[value.to_string()])
            }
        )*
    };
}

impl UrlBuilder {
    /// Builder producing unsigned URLs
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            secret: None,
            operations: OperationSet::new(),
            raw_image_url: None,
        }
    }

    /// Builder producing signed URLs
    ///
    /// An empty secret disables signing.
    pub fn signed(server_url: impl Into<String>, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        Self {
            secret: (!secret.is_empty()).then_some(secret),
            ..Self::new(server_url)
        }
    }

    pub fn from_config(config: &RezizerConfig) -> Self {
        match &config.secret {
            Some(secret) => Self::signed(config.server_url.clone(), secret.clone()),
            None => Self::new(config.server_url.clone()),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn is_signed(&self) -> bool {
        self.secret.is_some()
    }

    /// Operations recorded so far
    pub fn operations(&self) -> &OperationSet {
        &self.operations
    }

    /// Set the source image to transform
    pub fn with(&mut self, raw_image_url: impl Into<String>) -> &mut Self {
        self.raw_image_url = Some(raw_image_url.into());
        self
    }

    /// Resize to `width`x`height`
    ///
    /// Takes height first and encodes width first. Both values must be
    /// numeric; on error nothing is recorded.
    pub fn resize(
        &mut self,
        height: impl fmt::Display,
        width: impl fmt::Display,
    ) -> Result<&mut Self, RezizerError> {
        let (height, width) = (height.to_string(), width.to_string());

        match (Number::parse_display(&width), Number::parse_display(&height)) {
            (Some(w), Some(h)) => {
                self.operations.set("resize", OperationValue::NumPair(w, h));
                Ok(self)
            }
            (w, h) => {
                let invalid = invalid_names(&[("width", w.is_none()), ("height", h.is_none())]);
                Err(RezizerError::invalid_argument(
                    "resize",
                    format!(
                        "{} not numeric (width: {}, height: {})",
                        invalid, width, height
                    ),
                ))
            }
        }
    }

    /// Manual crop by edge coordinates
    ///
    /// All four values must be numeric; on error nothing is recorded.
    pub fn crop(
        &mut self,
        top: impl fmt::Display,
        left: impl fmt::Display,
        bottom: impl fmt::Display,
        right: impl fmt::Display,
    ) -> Result<&mut Self, RezizerError> {
        let raw = [
            top.to_string(),
            left.to_string(),
            bottom.to_string(),
            right.to_string(),
        ];
        let parsed: Vec<Option<Number>> = raw.iter().map(Number::parse_display).collect();

        if let [Some(t), Some(l), Some(b), Some(r)] = parsed.as_slice() {
            self.operations.set(
                "crop",
                OperationValue::NumQuad(t.clone(), l.clone(), b.clone(), r.clone()),
            );
            return Ok(self);
        }

        let labels = ["top", "left", "bottom", "right"];
        let flags: Vec<(&str, bool)> = labels
            .iter()
            .zip(&parsed)
            .map(|(label, value)| (*label, value.is_none()))
            .collect();
        Err(RezizerError::invalid_argument(
            "crop",
            format!(
                "{} not numeric (top: {}, left: {}, bottom: {}, right: {})",
                invalid_names(&flags),
                raw[0],
                raw[1],
                raw[2],
                raw[3]
            ),
        ))
    }

    /// Overlay another image, centered
    pub fn overlay(&mut self, url: &str) -> &mut Self {
        self.overlay_at(url, DEFAULT_OVERLAY_ALIGN)
    }

    /// Overlay another image at the given alignment
    pub fn overlay_at(&mut self, url: &str, align: &str) -> &mut Self {
        self.operations
            .set("overlay", OperationValue::text(format!("{}:{}", url, align)));
        self
    }

    /// Enable face detection, optionally focusing the crop on faces
    pub fn face_detection(&mut self, in_focus: bool) -> &mut Self {
        let value = if in_focus {
            OperationValue::text("focused")
        } else {
            OperationValue::Bool(true)
        };
        self.operations.set("face", value);
        self
    }

    /// Content-aware alignment
    pub fn smart(&mut self) -> &mut Self {
        self.operations.set("align", "smart");
        self
    }

    /// Ask for the image's palette instead of the image
    ///
    /// Overrides every other operation except `tile` and `map`.
    pub fn palette(&mut self, colors: Option<&str>) -> &mut Self {
        let value = match colors {
            Some(colors) => OperationValue::text(colors),
            None => OperationValue::Bool(true),
        };
        self.operations.set("palette", value);
        self
    }

    /// Record an operation by method name
    ///
    /// Accepts canonical names (`fit-in`) and the camelCase aliases `fitIn`,
    /// `maxKb`, `maxAge`. Flag operations ignore `args`; argument operations
    /// store `args` joined with `,` and stripped of anything but ASCII
    /// alphanumerics, `,` and `.`.
    ///
    /// Names outside the vocabulary are ignored without error. Use
    /// [`UrlBuilder::try_apply`] to reject them.
    pub fn apply<S: AsRef<str>>(&mut self, method: &str, args: &[S]) -> &mut Self {
        match method.parse::<Dispatch>() {
            Ok(dispatch) => self.record(dispatch, args),
            Err(_) => {
                tracing::debug!(method = %method, "Ignoring unknown image operation");
                self
            }
        }
    }

    /// Like [`UrlBuilder::apply`], but unknown names are an error
    pub fn try_apply<S: AsRef<str>>(
        &mut self,
        method: &str,
        args: &[S],
    ) -> Result<&mut Self, RezizerError> {
        let dispatch = method.parse::<Dispatch>()?;
        Ok(self.record(dispatch, args))
    }

    fn record<S: AsRef<str>>(&mut self, dispatch: Dispatch, args: &[S]) -> &mut Self {
        tracing::trace!(operation = dispatch.name(), "Recording image operation");
        match dispatch {
            Dispatch::Flag(name) => self.operations.set(name, true),
            Dispatch::Argument(name) => self.operations.set(name, sanitize(args)),
        }
        self
    }

    flag_operations! {
        distort => "distort";
        extend => "extend";
        fit => "fit";
        /// Fit the image inside the resize box instead of cropping
        fit_in => "fit-in";
        flip => "flip";
        flop => "flop";
        /// Return the image tiled; overrides every other operation
        tile => "tile";
        grayscale => "grayscale";
        invert => "invert";
        /// Return the image map; overrides everything except `tile`
        map => "map";
        max => "max";
        min => "min";
        progressive => "progressive";
        round => "round";
    }

    argument_operations! {
        tint => "tint";
        background => "background";
        blur => "blur";
        format => "format";
        max_age => "max-age";
        max_kb => "max-kb";
        quality => "quality";
        rotate => "rotate";
        /// Alignment keyword; `top`/`left`/`right`/`bottom` are remapped on encoding
        align => "align";
        /// Pixel density multiplier, appended to `resize` as `@<n>x`
        retina => "retina";
    }

    /// The encoded operations path, without server, signature or image
    pub fn path(&self) -> String {
        encoder::encode(&self.operations)
    }

    /// Signature of the current path, when a secret is configured
    pub fn signature(&self) -> Option<String> {
        signer::sign(&self.path(), self.secret.as_deref())
    }

    /// Render the final URL
    ///
    /// An image that was never set renders as an empty trailing segment.
    pub fn generate(&self) -> String {
        let path = self.path();
        let signature = signer::sign(&path, self.secret.as_deref());

        let mut url = format!("{}/", self.server_url);
        if let Some(signature) = &signature {
            url.push_str(signature);
            url.push('/');
        }
        url.push_str(&path);
        url.push('/');

        let image = self.raw_image_url.as_deref().unwrap_or_default();
        url.push_str(image.strip_prefix('/').unwrap_or(image));

        tracing::debug!(
            signed = signature.is_some(),
            operations = self.operations.len(),
            "Generated image URL"
        );

        url
    }
}

impl fmt::Display for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate())
    }
}

/// Flagged names with a matching verb: "width is", "top, left and bottom are"
fn invalid_names(flags: &[(&str, bool)]) -> String {
    let names: Vec<&str> = flags
        .iter()
        .filter(|(_, invalid)| *invalid)
        .map(|(name, _)| *name)
        .collect();

    match names.as_slice() {
        [] => "no value is".to_string(),
        [one] => format!("{} is", one),
        [rest @ .., last] => format!("{} and {} are", rest.join(", "), last),
    }
}
