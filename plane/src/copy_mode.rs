//! Copy modes and the pure decision of what a copy actually does.

/// How a plane is built from caller supplied memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CopyMode {
    /// Reference the memory, keeping its stride. Never allocates.
    UseKeepLayout,
    /// Copy into a new, tightly packed buffer.
    CopyRemovePaddingLayout,
    /// Copy into a new buffer with the same stride, padding bytes are not copied.
    CopyKeepLayoutDoNotCopyPaddingData,
    /// Copy into a new buffer with the same stride, including the padding bytes.
    CopyKeepLayoutCopyPaddingData,
}

/// How a plane or frame is built from another plane or frame.
///
/// Extends [`CopyMode`] by modes which decide based on whether the source owns its memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdvancedCopyMode {
    UseKeepLayout,
    CopyRemovePaddingLayout,
    CopyKeepLayoutDoNotCopyPaddingData,
    CopyKeepLayoutCopyPaddingData,
    /// Reference a non-owning source, copy an owning source with padding removed.
    ///
    /// Two owners never end up sharing one allocation.
    #[default]
    UseOrCopy,
    /// Reference a non-owning source, copy an owning source keeping its stride.
    UseOrCopyKeepLayout,
}

/// The layout of a deep copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeepCopy {
    /// The copy has no padding.
    RemovePadding,
    /// The copy has the stride of the source, its padding bytes are zeroed.
    KeepLayout,
    /// The copy has the stride of the source, its padding bytes are copied.
    KeepLayoutWithPadding,
}

/// What a copy mode resolves to for a particular source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CopyAction {
    Alias,
    Copy(DeepCopy),
}

impl DeepCopy {
    pub const fn keeps_layout(self) -> bool {
        !matches!(self, DeepCopy::RemovePadding)
    }

    pub const fn copies_padding(self) -> bool {
        matches!(self, DeepCopy::KeepLayoutWithPadding)
    }
}

impl From<CopyMode> for AdvancedCopyMode {
    fn from(mode: CopyMode) -> Self {
        match mode {
            CopyMode::UseKeepLayout => AdvancedCopyMode::UseKeepLayout,
            CopyMode::CopyRemovePaddingLayout => AdvancedCopyMode::CopyRemovePaddingLayout,
            CopyMode::CopyKeepLayoutDoNotCopyPaddingData => {
                AdvancedCopyMode::CopyKeepLayoutDoNotCopyPaddingData
            }
            CopyMode::CopyKeepLayoutCopyPaddingData => {
                AdvancedCopyMode::CopyKeepLayoutCopyPaddingData
            }
        }
    }
}

impl CopyMode {
    /// Caller memory is never owned by the plane built from it.
    pub const fn action(self) -> CopyAction {
        match self {
            CopyMode::UseKeepLayout => CopyAction::Alias,
            CopyMode::CopyRemovePaddingLayout => CopyAction::Copy(DeepCopy::RemovePadding),
            CopyMode::CopyKeepLayoutDoNotCopyPaddingData => CopyAction::Copy(DeepCopy::KeepLayout),
            CopyMode::CopyKeepLayoutCopyPaddingData => {
                CopyAction::Copy(DeepCopy::KeepLayoutWithPadding)
            }
        }
    }
}

impl AdvancedCopyMode {
    /// Decide between referencing and copying a source.
    pub const fn action(self, source_is_owner: bool) -> CopyAction {
        match self {
            AdvancedCopyMode::UseKeepLayout => CopyAction::Alias,
            AdvancedCopyMode::CopyRemovePaddingLayout => CopyAction::Copy(DeepCopy::RemovePadding),
            AdvancedCopyMode::CopyKeepLayoutDoNotCopyPaddingData => {
                CopyAction::Copy(DeepCopy::KeepLayout)
            }
            AdvancedCopyMode::CopyKeepLayoutCopyPaddingData => {
                CopyAction::Copy(DeepCopy::KeepLayoutWithPadding)
            }
            AdvancedCopyMode::UseOrCopy if source_is_owner => {
                CopyAction::Copy(DeepCopy::RemovePadding)
            }
            AdvancedCopyMode::UseOrCopyKeepLayout if source_is_owner => {
                CopyAction::Copy(DeepCopy::KeepLayout)
            }
            AdvancedCopyMode::UseOrCopy | AdvancedCopyMode::UseOrCopyKeepLayout => {
                CopyAction::Alias
            }
        }
    }
}
