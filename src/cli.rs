//! Operation directives for the command line
//!
//! Each directive is `name` or `name=arg,arg,...` and is applied to the
//! builder in the order given:
//!
//! ```text
//! rezizer --server-url http://img.example.com photo.jpg resize=300,200 fit-in blur=5
//! ```

use std::str::FromStr;

use crate::builder::UrlBuilder;
use crate::error::RezizerError;

/// One parsed `name[=args]` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub args: Vec<String>,
}

impl FromStr for Directive {
    type Err = RezizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, args) = match s.split_once('=') {
            Some((name, args)) => (name, args.split(',').map(str::to_string).collect()),
            None => (s, Vec::new()),
        };

        if name.is_empty() {
            return Err(RezizerError::invalid_argument(
                "directive",
                format!("missing operation name in '{}'", s),
            ));
        }

        Ok(Directive {
            name: name.to_string(),
            args,
        })
    }
}

impl Directive {
    /// Apply to a builder; names outside the vocabulary are rejected
    pub fn apply_to<'a>(
        &self,
        url: &'a mut UrlBuilder,
    ) -> Result<&'a mut UrlBuilder, RezizerError> {
        match self.name.as_str() {
            "resize" => {
                let [height, width] = self.exact::<2>()?;
                url.resize(height, width)
            }
            "crop" => {
                let [top, left, bottom, right] = self.exact::<4>()?;
                url.crop(top, left, bottom, right)
            }
            "overlay" => match self.args.as_slice() {
                [image] => Ok(url.overlay(image)),
                [image, align] => Ok(url.overlay_at(image, align)),
                _ => Err(self.arity_error("1 or 2")),
            },
            "face" => match self.args.as_slice() {
                [] => Ok(url.face_detection(false)),
                [focus] if focus == "focused" => Ok(url.face_detection(true)),
                _ => Err(RezizerError::invalid_argument(
                    "face",
                    "only 'face' or 'face=focused' are accepted",
                )),
            },
            "smart" => Ok(url.smart()),
            "palette" => {
                let colors = self.args.join(",");
                Ok(url.palette((!colors.is_empty()).then_some(colors.as_str())))
            }
            name => url.try_apply(name, &self.args),
        }
    }

    fn exact<const N: usize>(&self) -> Result<[&str; N], RezizerError> {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        args.try_into().map_err(|_| self.arity_error(&N.to_string()))
    }

    fn arity_error(&self, expected: &str) -> RezizerError {
        RezizerError::invalid_argument(
            self.name.clone(),
            format!("expected {} argument(s), got {}", expected, self.args.len()),
        )
    }
}

/// Parse and apply every directive in order, stopping at the first error
pub fn apply_all<'a, I, S>(
    url: &'a mut UrlBuilder,
    directives: I,
) -> Result<&'a mut UrlBuilder, RezizerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for raw in directives {
        let directive: Directive = raw.as_ref().parse()?;
        directive.apply_to(url)?;
    }
    Ok(url)
}
