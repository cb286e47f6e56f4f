//! In-memory property catalog
//!
//! Resolves a `propertyId` to its listing terms. Listings are registered at
//! startup; the platform default terms answer calculations that name no
//! property.

use std::collections::HashMap;
use tokio::sync::RwLock;

use core_kernel::PropertyId;
use domain_returns::ListingTerms;

/// A property open for fractional investment
#[derive(Debug, Clone)]
pub struct PropertyListing {
    /// Listing identifier
    pub id: PropertyId,
    /// Display name
    pub name: String,
    /// The listing's economics
    pub terms: ListingTerms,
}

/// Registry of listings keyed by property ID
#[derive(Debug)]
pub struct PropertyCatalog {
    default_terms: ListingTerms,
    listings: RwLock<HashMap<PropertyId, PropertyListing>>,
}

impl PropertyCatalog {
    /// Creates a catalog with the platform default terms
    pub fn new(default_terms: ListingTerms) -> Self {
        Self {
            default_terms,
            listings: RwLock::new(HashMap::new()),
        }
    }

    /// The platform default terms
    pub fn default_terms(&self) -> &ListingTerms {
        &self.default_terms
    }

    /// Registers or replaces a listing
    pub async fn insert(&self, listing: PropertyListing) {
        self.listings.write().await.insert(listing.id, listing);
    }

    /// Looks up a listing
    pub async fn get(&self, id: &PropertyId) -> Option<PropertyListing> {
        self.listings.read().await.get(id).cloned()
    }

    /// Resolves terms for an optional property reference
    ///
    /// `None` when the property is named but unknown.
    pub async fn terms_for(&self, id: Option<PropertyId>) -> Option<ListingTerms> {
        match id {
            Some(id) => self.get(&id).await.map(|listing| listing.terms),
            None => Some(self.default_terms.clone()),
        }
    }
}
