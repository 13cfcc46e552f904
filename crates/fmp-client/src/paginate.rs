//! Page-by-page retrieval of paginated endpoints.
//!
//! A paginated call starts at the requested page (or the endpoint's first
//! page) and stops at the first empty page, after a page shorter than the
//! requested page size, or at the page ceiling. Every page goes through the
//! same interpretation as a single call, so an error on any page aborts the
//! whole walk.

use fmp_core::{Endpoint, FmpError, ParamValue, Params, Result, interpret};
use futures::stream::{self, Stream, TryStreamExt};
use serde_json::Value;
use tracing::{debug, warn};

use crate::executor::Executor;

#[derive(Clone, Copy, Debug)]
struct Cursor {
    next: Option<u32>,
    fetched: u32,
}

fn integer_param(params: &Params, name: &str) -> Result<Option<i64>> {
    match params.get(name) {
        None => Ok(None),
        Some(ParamValue::Integer(n)) => Ok(Some(*n)),
        Some(other) => Err(FmpError::InvalidParameter(format!(
            "{name} must be an integer, got {}",
            other.type_name()
        ))),
    }
}

impl Executor {
    /// Stream the raw records of a paginated endpoint, one item per page.
    ///
    /// Pages are fetched lazily as the stream is polled. `max_pages` caps the
    /// number of requests for this walk; `None` uses the configured ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::InvalidParameter`] up front if the endpoint is not
    /// paginated or the page parameter is not a non-negative integer. Errors
    /// on individual pages are yielded by the stream.
    pub fn pages<'a>(
        &'a self,
        endpoint: &'a Endpoint,
        params: &Params,
        max_pages: Option<u32>,
    ) -> Result<impl Stream<Item = Result<Vec<Value>>> + Send + 'a> {
        let pagination = endpoint.pagination.ok_or_else(|| {
            FmpError::InvalidParameter(format!("{} is not paginated", endpoint.name))
        })?;

        let start = match integer_param(params, pagination.param)? {
            Some(page) => u32::try_from(page).map_err(|_| {
                FmpError::InvalidParameter(format!("{} must be non-negative", pagination.param))
            })?,
            None => pagination.first_page,
        };
        let page_size = match pagination.size_param {
            Some(name) => integer_param(params, name)?.and_then(|n| usize::try_from(n).ok()),
            None => None,
        };
        let max_pages = max_pages.unwrap_or_else(|| self.config().max_pages()).max(1);
        let params = params.clone();

        let cursor = Cursor {
            next: Some(start),
            fetched: 0,
        };

        Ok(stream::try_unfold(cursor, move |mut cursor| {
            let mut page_params = params.clone();
            async move {
                let Some(page) = cursor.next else {
                    return Ok(None);
                };
                if cursor.fetched >= max_pages {
                    warn!(
                        endpoint = endpoint.name,
                        max_pages, "page ceiling reached, stopping pagination"
                    );
                    return Ok(None);
                }

                page_params.set(pagination.param, page);
                let fetched = self.execute(endpoint, &page_params).await?;
                let records = interpret(fetched, endpoint.envelope)?.into_records();
                cursor.fetched += 1;

                if records.is_empty() {
                    debug!(endpoint = endpoint.name, page, "empty page, pagination finished");
                    return Ok(None);
                }

                let short = page_size.is_some_and(|size| records.len() < size);
                cursor.next = if short { None } else { page.checked_add(1) };
                debug!(endpoint = endpoint.name, page, records = records.len(), "page fetched");

                Ok(Some((records, cursor)))
            }
        }))
    }

    /// Fetch every page of a paginated endpoint and concatenate the records
    /// in page order. `max_pages` is as for [`Executor::pages`].
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; records of earlier pages are
    /// discarded.
    pub async fn fetch_all_pages(
        &self,
        endpoint: &Endpoint,
        params: &Params,
        max_pages: Option<u32>,
    ) -> Result<Vec<Value>> {
        self.pages(endpoint, params, max_pages)?.try_concat().await
    }
}
