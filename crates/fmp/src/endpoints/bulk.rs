use fmp_core::{Params, Result};
use fmp_models::CompanyProfile;

use crate::{Fmp, Normalized};

impl Fmp {
    /// One part of the bulk profile export. Parts are numbered from 0.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn profile_bulk(&self, part: u32) -> Result<Normalized<CompanyProfile>> {
        self.fetch("profile-bulk", &Params::new().with("part", part)).await
    }

    /// Every part of the bulk profile export, until the first empty part.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch_all_pages`].
    pub async fn all_profiles_bulk(&self) -> Result<Normalized<CompanyProfile>> {
        self.fetch_all_pages("profile-bulk", &Params::new(), None).await
    }
}
