//! Products, SKUs and availabilities as seen by one customer.
//!
//! Unlike the partner catalog, customer listings need no country: the
//! customer's own billing country applies.

use crate::models::{Availability, Product, Sku};
use crate::rest::{node_kind, routes, Field, PartnerError, ResourceCollection};

node_kind! {
    /// Products available to a customer.
    CustomerProductsKind => CustomerProductCollection [CustomerId]
    get ResourceCollection<Product> = routes::GET_CUSTOMER_PRODUCTS
}

node_kind! {
    /// A customer's products of a catalog target view.
    CustomerProductsByTargetViewKind => CustomerProductCollectionByTargetView [CustomerId, TargetView]
    get ResourceCollection<Product> = routes::GET_CUSTOMER_PRODUCTS
}

node_kind! {
    /// A customer's products of a target view and segment.
    CustomerProductsByTargetSegmentKind => CustomerProductCollectionByTargetSegment [CustomerId, TargetView, TargetSegment]
    get ResourceCollection<Product> = routes::GET_CUSTOMER_PRODUCTS
}

node_kind! {
    /// A customer's products of a target view and reservation scope.
    CustomerProductsByTargetViewByScopeKind => CustomerProductCollectionByTargetViewByScope [CustomerId, TargetView, ReservationScope]
    get ResourceCollection<Product> = routes::GET_CUSTOMER_PRODUCTS
}

node_kind! {
    /// A customer's products of a target view, segment and reservation scope.
    CustomerProductsByTargetSegmentByScopeKind => CustomerProductCollectionByTargetSegmentByScope [CustomerId, TargetView, TargetSegment, ReservationScope]
    get ResourceCollection<Product> = routes::GET_CUSTOMER_PRODUCTS
}

node_kind! {
    /// A single product available to a customer.
    CustomerProductKind => CustomerProductOperations [CustomerId, ProductId]
    get Product = routes::GET_CUSTOMER_PRODUCT
}

node_kind! {
    /// A customer product resolved for a reservation scope.
    CustomerProductByScopeKind => CustomerProductByReservationScope [CustomerId, ProductId, ReservationScope]
    get Product = routes::GET_CUSTOMER_PRODUCT
}

node_kind! {
    /// The SKUs of a customer product.
    CustomerSkusKind => CustomerSkuCollection [CustomerId, ProductId]
    get ResourceCollection<Sku> = routes::GET_CUSTOMER_SKUS
}

node_kind! {
    /// The SKUs of a customer product for a reservation scope.
    CustomerSkusByScopeKind => CustomerSkuCollectionByReservationScope [CustomerId, ProductId, ReservationScope]
    get ResourceCollection<Sku> = routes::GET_CUSTOMER_SKUS
}

node_kind! {
    /// A single SKU available to a customer.
    CustomerSkuKind => CustomerSkuOperations [CustomerId, ProductId, SkuId]
    get Sku = routes::GET_CUSTOMER_SKU
}

node_kind! {
    /// A customer SKU resolved for a reservation scope.
    CustomerSkuByScopeKind => CustomerSkuByReservationScope [CustomerId, ProductId, SkuId, ReservationScope]
    get Sku = routes::GET_CUSTOMER_SKU
}

node_kind! {
    /// The availabilities of a customer SKU.
    CustomerAvailabilitiesKind => CustomerAvailabilityCollection [CustomerId, ProductId, SkuId]
    get ResourceCollection<Availability> = routes::GET_CUSTOMER_AVAILABILITIES
}

node_kind! {
    /// The availabilities of a customer SKU for a target segment.
    CustomerAvailabilitiesByTargetSegmentKind => CustomerAvailabilitiesByTargetSegment [CustomerId, ProductId, SkuId, TargetSegment]
    get ResourceCollection<Availability> = routes::GET_CUSTOMER_AVAILABILITIES
}

node_kind! {
    /// The availabilities of a customer SKU for a reservation scope.
    CustomerAvailabilitiesByScopeKind => CustomerAvailabilitiesByReservationScope [CustomerId, ProductId, SkuId, ReservationScope]
    get ResourceCollection<Availability> = routes::GET_CUSTOMER_AVAILABILITIES
}

node_kind! {
    /// A single availability of a customer SKU.
    CustomerAvailabilityKind => CustomerAvailabilityOperations [CustomerId, ProductId, SkuId, AvailabilityId]
    get Availability = routes::GET_CUSTOMER_AVAILABILITY
}

impl CustomerProductCollection {
    /// A single product.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `product_id` is empty.
    pub fn by_id(
        &self,
        product_id: impl Into<String>,
    ) -> Result<CustomerProductOperations, PartnerError> {
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
    ) -> Result<CustomerProductCollectionByTargetView, PartnerError> {
        self.child(Field::TargetView, target_view)
    }
}

impl CustomerProductCollectionByTargetView {
    /// Narrows the listing to a target segment.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `target_segment` is empty.
    pub fn by_target_segment(
        &self,
        target_segment: impl Into<String>,
    ) -> Result<CustomerProductCollectionByTargetSegment, PartnerError> {
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
    ) -> Result<CustomerProductCollectionByTargetViewByScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }
}

impl CustomerProductCollectionByTargetSegment {
    /// Narrows the listing to a reservation scope.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `reservation_scope` is empty.
    pub fn by_reservation_scope(
        &self,
        reservation_scope: impl Into<String>,
    ) -> Result<CustomerProductCollectionByTargetSegmentByScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }
}

impl CustomerProductOperations {
    /// Resolves the product for a reservation scope.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `reservation_scope` is empty.
    pub fn by_customer_reservation_scope(
        &self,
        reservation_scope: impl Into<String>,
    ) -> Result<CustomerProductByReservationScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }

    /// The product's SKUs.
    #[must_use]
    pub fn skus(&self) -> CustomerSkuCollection {
        self.scope()
    }
}

impl CustomerSkuCollection {
    /// A single SKU.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `sku_id` is empty.
    pub fn by_id(&self, sku_id: impl Into<String>) -> Result<CustomerSkuOperations, PartnerError> {
        self.child(Field::SkuId, sku_id)
    }

    /// Narrows the listing to a reservation scope.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `reservation_scope` is empty.
    pub fn by_reservation_scope(
        &self,
        reservation_scope: impl Into<String>,
    ) -> Result<CustomerSkuCollectionByReservationScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }
}

impl CustomerSkuOperations {
    /// Resolves the SKU for a reservation scope.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `reservation_scope` is empty.
    pub fn by_customer_reservation_scope(
        &self,
        reservation_scope: impl Into<String>,
    ) -> Result<CustomerSkuByReservationScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }

    /// The SKU's availabilities.
    #[must_use]
    pub fn availabilities(&self) -> CustomerAvailabilityCollection {
        self.scope()
    }
}

impl CustomerAvailabilityCollection {
    /// A single availability.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `availability_id` is empty.
    pub fn by_id(
        &self,
        availability_id: impl Into<String>,
    ) -> Result<CustomerAvailabilityOperations, PartnerError> {
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
    ) -> Result<CustomerAvailabilitiesByTargetSegment, PartnerError> {
        self.child(Field::TargetSegment, target_segment)
    }

    /// Narrows the listing to a reservation scope.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `reservation_scope` is empty.
    pub fn by_customer_reservation_scope(
        &self,
        reservation_scope: impl Into<String>,
    ) -> Result<CustomerAvailabilitiesByReservationScope, PartnerError> {
        self.child(Field::ReservationScope, reservation_scope)
    }
}
