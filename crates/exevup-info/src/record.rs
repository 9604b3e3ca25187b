use exevup_version::{Level, Notation, Version};
use tracing::debug;

use crate::{Error, Slot, Target, VersionRecord, VersionSlot};

impl VersionRecord {
    /// Copies out the structured and string versions held by `slot`.
    pub fn slot(&self, slot: Slot) -> VersionSlot {
        let (version, text) = match slot {
            Slot::File => (
                self.fixed_file_info.file_version.version,
                &self.string_file_info.file_version,
            ),
            Slot::Product => (
                self.fixed_file_info.product_version.version,
                &self.string_file_info.product_version,
            ),
        };

        VersionSlot {
            version,
            text: text.clone(),
        }
    }

    fn set_slot(&mut self, slot: Slot, value: VersionSlot) {
        let (version, text) = match slot {
            Slot::File => (
                &mut self.fixed_file_info.file_version.version,
                &mut self.string_file_info.file_version,
            ),
            Slot::Product => (
                &mut self.fixed_file_info.product_version.version,
                &mut self.string_file_info.product_version,
            ),
        };

        *version = value.version;
        *text = value.text;
    }

    /// The authoritative current version of `slot`.
    pub fn resolve(&self, slot: Slot) -> Result<Version, Error> {
        let current = self.slot(slot);
        if current.version.is_empty() {
            debug!(
                "No structured {slot} version, parsing {:?} instead",
                current.text
            );
        }
        current
            .resolve()
            .map_err(|source| Error::Resolve { slot, source })
    }

    pub fn file_version(&self) -> Result<Version, Error> {
        self.resolve(Slot::File)
    }

    pub fn product_version(&self) -> Result<Version, Error> {
        self.resolve(Slot::Product)
    }

    /// Returns a copy of the record with `target`'s slots set to the given
    /// versions, each rendered at `notation`.
    ///
    /// The file slot only ever receives `file` and the product slot only ever
    /// receives `product`. Slots outside `target` are copied unchanged.
    pub fn updated(
        &self,
        file: Version,
        product: Version,
        target: Target,
        notation: Notation,
    ) -> Self {
        let mut record = self.clone();
        for &slot in target.slots() {
            let version = match slot {
                Slot::File => file,
                Slot::Product => product,
            };
            debug!("Setting {slot} version to {}", version.render(notation));
            record.set_slot(slot, VersionSlot::rendered(version, notation));
        }
        record
    }

    /// Resolves both slots, bumps each at `level` and writes the results to
    /// `target`.
    ///
    /// Both slots are resolved even when only one is targeted, so a malformed
    /// version string anywhere in the record aborts the update. Only targeted
    /// slots are bumped, so only they can overflow.
    pub fn bumped(&self, level: Level, target: Target, notation: Notation) -> Result<Self, Error> {
        let mut file = self.file_version()?;
        let mut product = self.product_version()?;

        for &slot in target.slots() {
            let version = match slot {
                Slot::File => &mut file,
                Slot::Product => &mut product,
            };
            *version = version
                .bumped(level)
                .map_err(|source| Error::Bump { slot, source })?;
        }

        Ok(self.updated(file, product, target, notation))
    }
}
