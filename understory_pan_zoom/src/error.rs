// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Invalid arguments rejected while configuring or attaching a pan/zoom controller.
///
/// Runtime input is never an error: wheel and pointer events are clamped or
/// ignored. Every variant here is reported before a controller exists.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The minimum scale is larger than the maximum scale.
    #[error("minimum scale {min} is greater than maximum scale {max}")]
    InvertedScaleBounds {
        /// Configured minimum scale.
        min: f64,
        /// Configured maximum scale.
        max: f64,
    },
    /// A scale bound or start scale is not a positive number.
    #[error("scale {0} is not a positive number")]
    InvalidScale(f64),
    /// A start translation is not finite.
    #[error("start translation is not finite")]
    NonFiniteTranslation,
    /// The zoom step is not a positive finite number.
    #[error("zoom step {0} is not a positive finite number")]
    InvalidStep(f64),
    /// A containment mode string did not match any known mode.
    #[error("unknown containment mode `{0}`, expected `inside`, `outside` or `none`")]
    UnknownContainment(String),
    /// The container does not contain the target element.
    #[error("container is not an ancestor of the target")]
    ContainerNotAncestor,
    /// The target has no parent element to use as its container.
    #[error("target has no parent element")]
    NoParentElement,
}
