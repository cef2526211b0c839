//! The partner catalog: products, SKUs, availabilities.
//!
//! Every catalog listing is scoped to a country, so the chain always starts
//! with [`ProductCollection::by_country`]. Filters narrow a listing by adding
//! query parameters; they compose in one direction only (target view, then
//! target segment, then reservation scope).

use crate::models::{Availability, Product, Sku, SkuDownloadOptions};
use crate::rest::{node_kind, routes, Field, PartnerError, ResourceCollection};

node_kind! {
    /// The partner catalog. Narrow it to a country first.
    ProductsKind => ProductCollection []
}

node_kind! {
    /// Products available in a country.
    ProductsByCountryKind => ProductCollectionByCountry [Country]
    get ResourceCollection<Product> = routes::GET_PRODUCTS
}

node_kind! {
    /// Products of a catalog target view in a country.
    ProductsByTargetViewKind => ProductCollectionByTargetView [Country, TargetView]
    get ResourceCollection<Product> = routes::GET_PRODUCTS
}

node_kind! {
    /// Products of a target view, narrowed to a target segment.
    ProductsByTargetSegmentKind => ProductCollectionByTargetSegment [Country, TargetView, TargetSegment]
    get ResourceCollection<Product> = routes::GET_PRODUCTS
}

node_kind! {
    /// Products of a target view, narrowed to a reservation scope.
    ProductsByTargetViewByScopeKind => ProductCollectionByTargetViewByReservationScope [Country, TargetView, ReservationScope]
    get ResourceCollection<Product> = routes::GET_PRODUCTS
}

node_kind! {
    /// Products of a target view and segment, narrowed to a reservation scope.
    ProductsByTargetSegmentByScopeKind => ProductCollectionByTargetSegmentByReservationScope [Country, TargetView, TargetSegment, ReservationScope]
    get ResourceCollection<Product> = routes::GET_PRODUCTS
}

node_kind! {
    /// A single catalog product.
    ProductKind => ProductOperations [Country, ProductId]
    get Product = routes::GET_PRODUCT
}

node_kind! {
    /// The SKUs of a product.
    SkusKind => SkuCollection [Country, ProductId]
    get ResourceCollection<Sku> = routes::GET_SKUS
}

node_kind! {
    /// The SKUs of a product for a target segment.
    SkusByTargetSegmentKind => SkuCollectionByTargetSegment [Country, ProductId, TargetSegment]
    get ResourceCollection<Sku> = routes::GET_SKUS
}

node_kind! {
    /// The SKUs of a product for a reservation scope.
    SkusByScopeKind => SkuCollectionByReservationScope [Country, ProductId, ReservationScope]
    get ResourceCollection<Sku> = routes::GET_SKUS
}

node_kind! {
    /// The SKUs of a product for a target segment and reservation scope.
    SkusByTargetSegmentByScopeKind => SkuCollectionByTargetSegmentByReservationScope [Country, ProductId, TargetSegment, ReservationScope]
    get ResourceCollection<Sku> = routes::GET_SKUS
}

node_kind! {
    /// A single SKU.
    SkuKind => SkuOperations [Country, ProductId, SkuId]
    get Sku = routes::GET_SKU
}

node_kind! {
    /// Download options of a SKU.
    SkuDownloadOptionsKind => SkuDownloadOptionsOperations [Country, ProductId, SkuId]
    get ResourceCollection<SkuDownloadOptions> = routes::GET_SKU_DOWNLOAD_OPTIONS
}

node_kind! {
    /// The availabilities of a SKU.
    AvailabilitiesKind => AvailabilityCollection [Country, ProductId, SkuId]
    get ResourceCollection<Availability> = routes::GET_AVAILABILITIES
}

node_kind! {
    /// The availabilities of a SKU for a target segment.
    AvailabilitiesByTargetSegmentKind => AvailabilitiesByTargetSegment [Country, ProductId, SkuId, TargetSegment]
    get ResourceCollection<Availability> = routes::GET_AVAILABILITIES
}

node_kind! {
    /// The availabilities of a SKU for a reservation scope.
    AvailabilitiesByScopeKind => AvailabilitiesByReservationScope [Country, ProductId, SkuId, ReservationScope]
    get ResourceCollection<Availability> = routes::GET_AVAILABILITIES
}

node_kind! {
    /// The availabilities of a SKU for a target segment and reservation scope.
    AvailabilitiesByTargetSegmentByScopeKind => AvailabilitiesByTargetSegmentByReservationScope [Country, ProductId, SkuId, TargetSegment, ReservationScope]
    get ResourceCollection<Availability> = routes::GET_AVAILABILITIES
}

node_kind! {
    /// A single availability.
    AvailabilityKind => AvailabilityOperations [Country, ProductId, SkuId, AvailabilityId]
    get Availability = routes::GET_AVAILABILITY
}

impl ProductCollection {
    /// Narrows the catalog to a country.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `country` is empty or not a
    /// two-letter code.
    pub fn by_country(
        &self,
        country: impl Into<String>,
    ) -> Result<ProductCollectionByCountry, PartnerError> {
        self.child(Field::Country, country)
    }
}

impl ProductCollectionByCountry {
    /// A single product.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `product_id` is empty.
    pub fn by_id(&self, product_id: impl Into<String>) -> Result<ProductOperations, PartnerError> {
        self.child(Field::ProductId, product_id)
    }

    /// Narrows the listing to a catalog target view.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `target_view` is empty.
    pub fn by_target_view(
        &self,
        target_view: impl Into<String>,
    ) -> Result<ProductCollectionByTargetView, PartnerError> {
        self.child(Field::TargetView, target_view)
    }
}

impl ProductCollectionByTargetView {
    /// Narrows the listing to a target segment.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `target_segment` is empty.
    pub fn by_target_segment(
        &self,
        target_segment: impl Into<String>,
    ) -> Result<ProductCollectionByTargetSegment, PartnerError> {
        self.child(Field::TargetSegment, target_segment)
    }

    /// Narrows the listing to a reservation scope.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `reservation_scope` is empty.
    pub fn by_reservation_scope(
        &self,
        reservation_scope: impl Into<String>,
    ) -> Result<ProductCollectionByTargetViewByReservationScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }
}

impl ProductCollectionByTargetSegment {
    /// Narrows the listing to a reservation scope.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `reservation_scope` is empty.
    pub fn by_reservation_scope(
        &self,
        reservation_scope: impl Into<String>,
    ) -> Result<ProductCollectionByTargetSegmentByReservationScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }
}

impl ProductOperations {
    /// The product's SKUs.
    #[must_use]
    pub fn skus(&self) -> SkuCollection {
        self.scope()
    }
}

impl SkuCollection {
    /// A single SKU.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `sku_id` is empty.
    pub fn by_id(&self, sku_id: impl Into<String>) -> Result<SkuOperations, PartnerError> {
        self.child(Field::SkuId, sku_id)
    }

    /// Narrows the listing to a target segment.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `target_segment` is empty.
    pub fn by_target_segment(
        &self,
        target_segment: impl Into<String>,
    ) -> Result<SkuCollectionByTargetSegment, PartnerError> {
        self.child(Field::TargetSegment, target_segment)
    }

    /// Narrows the listing to a reservation scope.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `reservation_scope` is empty.
    pub fn by_reservation_scope(
        &self,
        reservation_scope: impl Into<String>,
    ) -> Result<SkuCollectionByReservationScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }
}

impl SkuCollectionByTargetSegment {
    /// Narrows the listing to a reservation scope.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `reservation_scope` is empty.
    pub fn by_reservation_scope(
        &self,
        reservation_scope: impl Into<String>,
    ) -> Result<SkuCollectionByTargetSegmentByReservationScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }
}

impl SkuOperations {
    /// The SKU's availabilities.
    #[must_use]
    pub fn availabilities(&self) -> AvailabilityCollection {
        self.scope()
    }

    /// The SKU's download options.
    #[must_use]
    pub fn download_options(&self) -> SkuDownloadOptionsOperations {
        self.scope()
    }
}

impl AvailabilityCollection {
    /// A single availability.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `availability_id` is empty.
    pub fn by_id(
        &self,
        availability_id: impl Into<String>,
    ) -> Result<AvailabilityOperations, PartnerError> {
        self.child(Field::AvailabilityId, availability_id)
    }

    /// Narrows the listing to a target segment.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `target_segment` is empty.
    pub fn by_target_segment(
        &self,
        target_segment: impl Into<String>,
    ) -> Result<AvailabilitiesByTargetSegment, PartnerError> {
        self.child(Field::TargetSegment, target_segment)
    }

    /// Narrows the listing to a reservation scope.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `reservation_scope` is empty.
    pub fn by_reservation_scope(
        &self,
        reservation_scope: impl Into<String>,
    ) -> Result<AvailabilitiesByReservationScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }
}

impl AvailabilitiesByTargetSegment {
    /// Narrows the listing to a reservation scope.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `reservation_scope` is empty.
    pub fn by_reservation_scope(
        &self,
        reservation_scope: impl Into<String>,
    ) -> Result<AvailabilitiesByTargetSegmentByReservationScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_support::partner;
    use crate::rest::{Retrievable, ValidationError};

    fn rendered<K: Retrievable>(node: &crate::rest::Node<K>) -> (String, Vec<(String, String)>) {
        let rendered = K::GET.render(node.context()).unwrap();
        (rendered.path, rendered.query)
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_country_is_normalized_and_sent_as_query() {
        let products = partner().products().by_country("us").unwrap();

        assert_eq!(
            rendered(&products),
            ("products".to_string(), pairs(&[("country", "US")]))
        );
    }

    #[test]
    fn test_invalid_country_is_rejected() {
        let err = partner().products().by_country("USA").unwrap_err();
        assert!(matches!(
            err,
            PartnerError::Validation(ValidationError::InvalidCountryCode { .. })
        ));
    }

    #[test]
    fn test_filters_append_query_parameters_in_navigation_order() {
        let listing = partner()
            .products()
            .by_country("US")
            .unwrap()
            .by_target_view("Azure")
            .unwrap()
            .by_target_segment("commercial")
            .unwrap()
            .by_reservation_scope("AzurePlan")
            .unwrap();

        assert_eq!(
            rendered(&listing),
            (
                "products".to_string(),
                pairs(&[
                    ("country", "US"),
                    ("targetView", "Azure"),
                    ("targetSegment", "commercial"),
                    ("reservationScope", "AzurePlan"),
                ])
            )
        );
    }

    #[test]
    fn test_sku_and_availability_paths() {
        let sku = partner()
            .products()
            .by_country("US")
            .unwrap()
            .by_id("DZH318Z0BQ3Q")
            .unwrap()
            .skus()
            .by_id("0001")
            .unwrap();

        assert_eq!(
            rendered(&sku),
            (
                "products/DZH318Z0BQ3Q/skus/0001".to_string(),
                pairs(&[("country", "US")])
            )
        );

        let availabilities = sku
            .availabilities()
            .by_target_segment("commercial")
            .unwrap()
            .by_reservation_scope("AzurePlan")
            .unwrap();
        let (path, query) = rendered(&availabilities);
        assert_eq!(path, "products/DZH318Z0BQ3Q/skus/0001/availabilities");
        assert_eq!(
            query,
            pairs(&[
                ("country", "US"),
                ("targetSegment", "commercial"),
                ("reservationScope", "AzurePlan"),
            ])
        );

        let (path, _) = rendered(&sku.download_options());
        assert_eq!(path, "products/DZH318Z0BQ3Q/skus/0001/downloadoptions");
    }

    #[test]
    fn test_blank_identifiers_fail_before_any_request() {
        let country = partner().products().by_country("US").unwrap();

        for value in ["", "   ", "\t"] {
            let err = country.by_id(value).unwrap_err();
            assert!(matches!(
                err,
                PartnerError::Validation(ValidationError::MissingField {
                    field: "product_id"
                })
            ));
        }
        assert!(country.by_target_view("").is_err());
    }
}
