use outcomes_model::{DisciplineId, RegionId};

use crate::error::{Result, TransformError};

/// The mutually-exclusive time-series choice: one discipline across all
/// regions, or one region across all disciplines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Discipline(DisciplineId),
    Region(RegionId),
}

impl Selection {
    /// Build a selection from the two optional ids held in external
    /// selection state.
    ///
    /// # Errors
    ///
    /// Fails with [`TransformError::InvalidSelection`] when both or neither
    /// id is present. This is a caller contract violation and is never
    /// silently defaulted.
    pub fn from_options(
        discipline: Option<DisciplineId>,
        region: Option<RegionId>,
    ) -> Result<Self> {
        match (discipline, region) {
            (Some(discipline), None) => Ok(Self::Discipline(discipline)),
            (None, Some(region)) => Ok(Self::Region(region)),
            (Some(_), Some(_)) | (None, None) => Err(TransformError::InvalidSelection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_side_must_be_present() {
        let discipline = DisciplineId::new("d1").unwrap();
        let region = RegionId::new("r1").unwrap();
        assert_eq!(
            Selection::from_options(Some(discipline.clone()), None),
            Ok(Selection::Discipline(discipline.clone()))
        );
        assert_eq!(
            Selection::from_options(None, Some(region.clone())),
            Ok(Selection::Region(region.clone()))
        );
        assert_eq!(
            Selection::from_options(None, None),
            Err(TransformError::InvalidSelection)
        );
        assert_eq!(
            Selection::from_options(Some(discipline), Some(region)),
            Err(TransformError::InvalidSelection)
        );
    }
}
