//! The checkout session.
//!
//! One session per checkout attempt. It owns the five field groups, the
//! wizard position, the applied discount and the validation error map,
//! and it orchestrates the async collaborators (address lookup, discount
//! registry, order gateway). All money figures flow through the cart's
//! totals functions; the session never stores a computed amount.

use std::collections::BTreeMap;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::cart::{order_totals, Cart, OrderTotals};
use crate::checkout::{
    estimated_delivery,
    validate::{validate_section, FieldValue, CONTACT_SCHEMA, DELIVERY_SCHEMA, GIFT_SCHEMA,
        PAYMENT_SCHEMA, SHIPPING_SCHEMA},
    AddressLookup, AddressPatch, CheckoutSection, ContactDetails, ContactPatch, DeliveryAddress,
    DiscountCode, DiscountRegistry, GiftOptions, GiftPatch, OrderConfirmation, OrderGateway,
    OrderRequest, PaymentDetails, PaymentPatch, ShippingDetails, ShippingPatch,
};
use crate::error::StorefrontError;
use crate::money::Money;

/// Error-map key for the discount code input (not tied to a section).
const DISCOUNT_CODE_KEY: &str = "discountCode";

/// State of one checkout attempt.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    /// Section currently shown; any section may be activated at any time.
    pub active_section: CheckoutSection,
    completed: Vec<CheckoutSection>,
    pub contact: ContactDetails,
    pub address: DeliveryAddress,
    pub gift: GiftOptions,
    pub shipping: ShippingDetails,
    pub payment: PaymentDetails,
    discount: Option<DiscountCode>,
    errors: BTreeMap<String, String>,
    is_submitting: bool,
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutSession {
    /// Fresh session: contact section active, nothing completed.
    pub fn new() -> Self {
        Self {
            active_section: CheckoutSection::Contact,
            completed: Vec::new(),
            contact: ContactDetails::default(),
            address: DeliveryAddress::default(),
            gift: GiftOptions::default(),
            shipping: ShippingDetails::default(),
            payment: PaymentDetails::default(),
            discount: None,
            errors: BTreeMap::new(),
            is_submitting: false,
        }
    }

    /// Rebuild a session from persisted field groups.
    ///
    /// The delivery estimate is re-derived from today's date: a snapshot
    /// written yesterday would otherwise show a stale (possibly past)
    /// delivery day.
    pub fn from_parts(
        contact: ContactDetails,
        address: DeliveryAddress,
        gift: GiftOptions,
        shipping: ShippingDetails,
        payment: PaymentDetails,
        discount: Option<DiscountCode>,
    ) -> Self {
        let mut session = Self {
            contact,
            address,
            gift,
            shipping,
            payment,
            discount,
            ..Self::new()
        };
        session.refresh_delivery_estimate();
        session
    }

    // ---- wizard position ----------------------------------------------

    /// Jump to a section. Never gated on completion of earlier ones.
    pub fn set_active_section(&mut self, section: CheckoutSection) {
        self.active_section = section;
    }

    /// Mark a section completed. Idempotent.
    pub fn complete_section(&mut self, section: CheckoutSection) {
        if !self.completed.contains(&section) {
            self.completed.push(section);
        }
    }

    /// Un-mark a completed section (e.g. the shopper goes back to edit).
    pub fn uncomplete_section(&mut self, section: CheckoutSection) {
        self.completed.retain(|s| s != &section);
    }

    /// Whether a section has been marked completed.
    pub fn is_completed(&self, section: CheckoutSection) -> bool {
        self.completed.contains(&section)
    }

    /// Validate the active section; on success mark it completed and
    /// advance to the next one.
    pub fn advance(&mut self) -> bool {
        if !self.validate_section(self.active_section) {
            return false;
        }
        self.complete_section(self.active_section);
        if let Some(next) = self.active_section.next() {
            self.active_section = next;
        }
        true
    }

    // ---- field updates ------------------------------------------------

    pub fn set_contact(&mut self, patch: ContactPatch) {
        self.contact.apply(patch);
    }

    pub fn set_address(&mut self, patch: AddressPatch) {
        self.address.apply(patch);
    }

    pub fn set_gift(&mut self, patch: GiftPatch) {
        self.gift.apply(patch);
    }

    pub fn set_payment(&mut self, patch: PaymentPatch) {
        self.payment.apply(patch);
    }

    /// Update the shipping method and recompute the delivery estimate.
    ///
    /// The estimate is always re-derived from today's date; a stale date
    /// from a persisted session is refreshed on the first change.
    pub fn set_shipping(&mut self, patch: ShippingPatch) {
        if let Some(method) = patch.method {
            self.shipping.method = method;
        }
        self.refresh_delivery_estimate();
    }

    /// Recompute the delivery estimate for the current method from today.
    pub fn refresh_delivery_estimate(&mut self) {
        let today = Local::now().date_naive();
        self.shipping.estimated_date = Some(estimated_delivery(today, self.shipping.method));
    }

    // ---- address lookup -----------------------------------------------

    /// Resolve street and city from the entered postcode + house number.
    ///
    /// On success the resolved fields overwrite whatever was typed and
    /// manual entry is switched off. On failure the session flips to
    /// manual entry and records a hint on the postcode field; the lookup
    /// failing is never a blocking error.
    pub async fn resolve_address(&mut self, lookup: &dyn AddressLookup) {
        match lookup
            .lookup(&self.address.postcode, &self.address.house_number)
            .await
        {
            Ok(found) => {
                debug!(street = %found.street, city = %found.city, "address resolved");
                self.address.street = found.street;
                self.address.city = found.city;
                self.address.is_manual_entry = false;
                self.errors.remove("delivery.postcode");
            }
            Err(err) => {
                warn!(error = %err, "address lookup failed, switching to manual entry");
                self.address.is_manual_entry = true;
                self.errors.insert(
                    "delivery.postcode".to_string(),
                    "Adres niet gevonden, vul je adres handmatig in".to_string(),
                );
            }
        }
    }

    // ---- discount codes -----------------------------------------------

    /// Try to apply a discount code for the given cart subtotal.
    ///
    /// An unknown code or an unmet minimum records an error on the
    /// discount input and leaves any previously applied code in place.
    /// A valid code replaces the previous one and clears the error.
    pub async fn apply_discount_code(
        &mut self,
        registry: &DiscountRegistry,
        subtotal: Money,
        input: &str,
    ) -> bool {
        let Some(code) = registry.lookup(input).await else {
            self.errors.insert(
                DISCOUNT_CODE_KEY.to_string(),
                "Deze kortingscode is niet geldig".to_string(),
            );
            return false;
        };

        if !code.applies_to(subtotal) {
            let minimum = code.minimum_order.unwrap_or_else(Money::zero);
            self.errors.insert(
                DISCOUNT_CODE_KEY.to_string(),
                format!("Deze code geldt vanaf een bestelbedrag van {}", minimum.display()),
            );
            return false;
        }

        info!(code = %code.code, "discount applied");
        self.discount = Some(code);
        self.errors.remove(DISCOUNT_CODE_KEY);
        true
    }

    /// Remove the applied discount code, if any.
    pub fn remove_discount_code(&mut self) {
        self.discount = None;
        self.errors.remove(DISCOUNT_CODE_KEY);
    }

    /// The currently applied discount code.
    pub fn discount(&self) -> Option<&DiscountCode> {
        self.discount.as_ref()
    }

    // ---- totals -------------------------------------------------------

    /// Order totals for a cart under this session's discount and method.
    pub fn order_totals(&self, cart: &Cart) -> OrderTotals {
        order_totals(cart.items(), self.discount.as_ref(), self.shipping.method)
    }

    // ---- validation ---------------------------------------------------

    /// Validate one section, recording errors keyed `section.field`.
    ///
    /// Previous errors for the section are cleared first, so fixing a
    /// field and re-validating removes its message.
    pub fn validate_section(&mut self, section: CheckoutSection) -> bool {
        let prefix = format!("{}.", section.as_str());
        self.errors.retain(|key, _| !key.starts_with(&prefix));

        let violations = self.section_violations(section);
        let valid = violations.is_empty();
        for (field, message) in violations {
            self.errors.insert(format!("{prefix}{field}"), message);
        }
        valid
    }

    /// Validate every section. Returns the number of invalid fields and
    /// replaces the error map with the full result.
    pub fn validate_all(&mut self) -> usize {
        // Keep errors not owned by any section (the discount input)
        self.errors
            .retain(|key, _| !CheckoutSection::ALL.iter().any(|s| {
                key.starts_with(s.as_str()) && key[s.as_str().len()..].starts_with('.')
            }));

        let mut invalid = 0;
        for section in CheckoutSection::ALL {
            let prefix = section.as_str();
            for (field, message) in self.section_violations(section) {
                invalid += 1;
                self.errors.insert(format!("{prefix}.{field}"), message);
            }
        }
        invalid
    }

    fn section_violations(&self, section: CheckoutSection) -> BTreeMap<String, String> {
        let method = self.payment.method.map(|m| m.as_str()).unwrap_or("");
        match section {
            CheckoutSection::Contact => validate_section(
                CONTACT_SCHEMA,
                &[
                    ("email", FieldValue::Text(&self.contact.email)),
                    ("firstName", FieldValue::Text(&self.contact.first_name)),
                    ("lastName", FieldValue::Text(&self.contact.last_name)),
                    ("phone", FieldValue::Text(&self.contact.phone)),
                ],
            ),
            CheckoutSection::Delivery => validate_section(
                DELIVERY_SCHEMA,
                &[
                    ("postcode", FieldValue::Text(&self.address.postcode)),
                    ("houseNumber", FieldValue::Text(&self.address.house_number)),
                    ("street", FieldValue::Text(&self.address.street)),
                    ("city", FieldValue::Text(&self.address.city)),
                ],
            ),
            CheckoutSection::Gift => validate_section(
                GIFT_SCHEMA,
                &[("message", FieldValue::Text(&self.gift.message))],
            ),
            CheckoutSection::Shipping => validate_section(SHIPPING_SCHEMA, &[]),
            CheckoutSection::Payment => validate_section(
                PAYMENT_SCHEMA,
                &[
                    ("method", FieldValue::Text(method)),
                    ("ageVerified", FieldValue::Flag(self.payment.age_verified)),
                ],
            ),
        }
    }

    /// Current validation errors, keyed `section.field` (plus
    /// `discountCode` for the discount input).
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Clear one error, typically when the shopper edits that field.
    pub fn clear_field_error(&mut self, key: &str) {
        self.errors.remove(key);
    }

    // ---- submission ---------------------------------------------------

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Validate everything and submit the order.
    ///
    /// A second call while one is in flight is rejected up front. A
    /// validation failure records the full error map and has no other
    /// side effect. The cart is left untouched either way; the caller
    /// clears it once the confirmation is shown.
    pub async fn submit_order(
        &mut self,
        gateway: &dyn OrderGateway,
        cart: &Cart,
    ) -> Result<OrderConfirmation, StorefrontError> {
        if self.is_submitting {
            return Err(StorefrontError::SubmissionInFlight);
        }

        let invalid = self.validate_all();
        if invalid > 0 {
            debug!(invalid, "submission blocked by validation");
            return Err(StorefrontError::ValidationFailed(invalid));
        }

        let request = OrderRequest {
            contact: self.contact.clone(),
            address: self.address.clone(),
            gift: self.gift.clone(),
            shipping: self.shipping.clone(),
            payment: self.payment.clone(),
            items: cart.items().to_vec(),
            totals: self.order_totals(cart),
            discount: self.discount.clone(),
        };

        self.is_submitting = true;
        let result = gateway.submit(&request).await;
        self.is_submitting = false;

        match &result {
            Ok(confirmation) => {
                info!(order_number = %confirmation.order_number, "order confirmed")
            }
            Err(err) => warn!(error = %err, "order submission failed"),
        }
        result
    }

    /// Drop all checkout state, back to a fresh session.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, WineType};
    use crate::checkout::{MockAddressLookup, MockOrderGateway, PaymentMethod, ShippingMethod};

    fn wine(id: &str, cents: i64) -> Product {
        Product::new(id, id.to_uppercase(), Money::from_cents(cents), "Bordeaux", WineType::Red)
    }

    fn cart_with(cents: i64) -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&wine("wine-test", cents), 1);
        cart
    }

    fn filled_session() -> CheckoutSession {
        let mut session = CheckoutSession::new();
        session.set_contact(ContactPatch {
            email: Some("anna@example.nl".to_string()),
            first_name: Some("Anna".to_string()),
            last_name: Some("de Vries".to_string()),
            phone: Some("0612345678".to_string()),
        });
        session.set_address(AddressPatch {
            postcode: Some("1012 JS".to_string()),
            house_number: Some("1".to_string()),
            street: Some("Dam".to_string()),
            city: Some("Amsterdam".to_string()),
            ..Default::default()
        });
        session.set_payment(PaymentPatch {
            method: Some(PaymentMethod::Ideal),
            age_verified: Some(true),
        });
        session
    }

    #[test]
    fn test_complete_section_is_idempotent() {
        let mut session = CheckoutSession::new();

        session.complete_section(CheckoutSection::Contact);
        session.complete_section(CheckoutSection::Contact);

        assert!(session.is_completed(CheckoutSection::Contact));
        session.uncomplete_section(CheckoutSection::Contact);
        assert!(!session.is_completed(CheckoutSection::Contact));
    }

    #[test]
    fn test_advance_blocks_on_invalid_section() {
        let mut session = CheckoutSession::new();

        assert!(!session.advance());
        assert_eq!(session.active_section, CheckoutSection::Contact);
        assert!(session.errors().contains_key("contact.email"));
    }

    #[test]
    fn test_advance_moves_to_next_section_when_valid() {
        let mut session = filled_session();

        assert!(session.advance());
        assert!(session.is_completed(CheckoutSection::Contact));
        assert_eq!(session.active_section, CheckoutSection::Delivery);
    }

    #[test]
    fn test_any_section_can_be_activated() {
        let mut session = CheckoutSession::new();
        session.set_active_section(CheckoutSection::Payment);
        assert_eq!(session.active_section, CheckoutSection::Payment);
    }

    #[test]
    fn test_revalidation_clears_fixed_errors() {
        let mut session = CheckoutSession::new();
        session.validate_section(CheckoutSection::Contact);
        assert!(session.errors().contains_key("contact.email"));

        session.set_contact(ContactPatch {
            email: Some("anna@example.nl".to_string()),
            first_name: Some("Anna".to_string()),
            last_name: Some("de Vries".to_string()),
            phone: Some("0612345678".to_string()),
        });
        assert!(session.validate_section(CheckoutSection::Contact));
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_set_shipping_recomputes_estimate() {
        let mut session = CheckoutSession::new();
        assert!(session.shipping.estimated_date.is_none());

        session.set_shipping(ShippingPatch {
            method: Some(ShippingMethod::Evening),
        });

        assert_eq!(session.shipping.method, ShippingMethod::Evening);
        assert!(session.shipping.estimated_date.is_some());
    }

    #[tokio::test]
    async fn test_apply_unknown_code_keeps_existing_discount() {
        let mut session = CheckoutSession::new();
        let registry = DiscountRegistry::standard();
        let subtotal = Money::from_cents(10000);

        assert!(session.apply_discount_code(&registry, subtotal, "WELKOM10").await);
        assert_eq!(session.discount().unwrap().code, "WELKOM10");

        assert!(!session.apply_discount_code(&registry, subtotal, "ONGELDIG").await);
        // The valid code stays applied, the error sits on the input
        assert_eq!(session.discount().unwrap().code, "WELKOM10");
        assert_eq!(
            session.errors().get("discountCode").unwrap(),
            "Deze kortingscode is niet geldig"
        );
    }

    #[tokio::test]
    async fn test_apply_code_below_minimum_is_rejected() {
        let mut session = CheckoutSession::new();
        let registry = DiscountRegistry::standard();

        let applied = session
            .apply_discount_code(&registry, Money::from_cents(5000), "WIJNGILDE15")
            .await;

        assert!(!applied);
        assert!(session.discount().is_none());
        assert!(session
            .errors()
            .get("discountCode")
            .unwrap()
            .contains("€ 75,00"));
    }

    #[tokio::test]
    async fn test_valid_code_replaces_previous_and_clears_error() {
        let mut session = CheckoutSession::new();
        let registry = DiscountRegistry::standard();
        let subtotal = Money::from_cents(10000);

        session.apply_discount_code(&registry, subtotal, "ONGELDIG").await;
        assert!(session.errors().contains_key("discountCode"));

        session.apply_discount_code(&registry, subtotal, "WELKOM10").await;
        session.apply_discount_code(&registry, subtotal, "PROEFDOOS5").await;

        assert_eq!(session.discount().unwrap().code, "PROEFDOOS5");
        assert!(!session.errors().contains_key("discountCode"));
    }

    #[tokio::test]
    async fn test_remove_discount_code() {
        let mut session = CheckoutSession::new();
        let registry = DiscountRegistry::standard();

        session
            .apply_discount_code(&registry, Money::from_cents(10000), "WELKOM10")
            .await;
        session.remove_discount_code();

        assert!(session.discount().is_none());
    }

    #[tokio::test]
    async fn test_resolve_address_fills_street_and_city() {
        let mut session = CheckoutSession::new();
        session.set_address(AddressPatch {
            postcode: Some("1012 JS".to_string()),
            house_number: Some("1".to_string()),
            ..Default::default()
        });

        session.resolve_address(&MockAddressLookup).await;

        assert_eq!(session.address.street, "Dam");
        assert_eq!(session.address.city, "Amsterdam");
        assert!(!session.address.is_manual_entry);
    }

    #[tokio::test]
    async fn test_failed_lookup_switches_to_manual_entry() {
        let mut session = CheckoutSession::new();
        session.set_address(AddressPatch {
            postcode: Some("9999 ZZ".to_string()),
            house_number: Some("12".to_string()),
            ..Default::default()
        });

        session.resolve_address(&MockAddressLookup).await;

        assert!(session.address.is_manual_entry);
        assert!(session.errors().contains_key("delivery.postcode"));
        assert!(session.address.street.is_empty());
    }

    #[test]
    fn test_order_totals_uses_discount_and_method() {
        let mut session = CheckoutSession::new();
        session.set_shipping(ShippingPatch {
            method: Some(ShippingMethod::Evening),
        });
        let cart = cart_with(10000);

        let totals = session.order_totals(&cart);

        assert_eq!(totals.subtotal.cents, 10000);
        assert_eq!(totals.shipping.cents, 795);
        assert_eq!(totals.total.cents, 10795);
    }

    #[tokio::test]
    async fn test_submit_rejects_unverified_age() {
        let mut session = filled_session();
        session.set_payment(PaymentPatch {
            age_verified: Some(false),
            ..Default::default()
        });
        let cart = cart_with(5000);

        let err = session.submit_order(&MockOrderGateway, &cart).await.unwrap_err();

        assert!(matches!(err, StorefrontError::ValidationFailed(1)));
        assert_eq!(
            session.errors().get("payment.ageVerified").unwrap(),
            "Je moet bevestigen dat je 18 jaar of ouder bent"
        );
        assert_eq!(cart.items().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_valid_order_confirms() {
        let mut session = filled_session();
        let cart = cart_with(5000);

        let confirmation = session.submit_order(&MockOrderGateway, &cart).await.unwrap();

        assert!(confirmation.order_number.starts_with("WH-"));
        assert!(session.errors().is_empty());
        assert!(!session.is_submitting());
        // The cart is the caller's to clear after showing the confirmation
        assert_eq!(cart.items().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_submit_preserves_discount_error() {
        let mut session = CheckoutSession::new();
        let registry = DiscountRegistry::standard();
        session.apply_discount_code(&registry, Money::from_cents(100), "ONGELDIG").await;
        let cart = cart_with(5000);

        let _ = session.submit_order(&MockOrderGateway, &cart).await;

        // Section validation replaces section errors only
        assert!(session.errors().contains_key("discountCode"));
        assert!(session.errors().contains_key("contact.email"));
    }

    #[test]
    fn test_from_parts_rederives_delivery_estimate() {
        use crate::checkout::estimated_delivery;
        use chrono::NaiveDate;

        // A snapshot written long ago carries a stale estimate
        let stale = ShippingDetails {
            method: ShippingMethod::Evening,
            estimated_date: NaiveDate::from_ymd_opt(2020, 1, 2),
        };

        let session = CheckoutSession::from_parts(
            ContactDetails::default(),
            DeliveryAddress::default(),
            GiftOptions::default(),
            stale,
            PaymentDetails::default(),
            None,
        );

        let today = Local::now().date_naive();
        assert_eq!(session.shipping.method, ShippingMethod::Evening);
        assert_eq!(
            session.shipping.estimated_date,
            Some(estimated_delivery(today, ShippingMethod::Evening))
        );
    }

    #[test]
    fn test_reset_returns_to_fresh_state() {
        let mut session = filled_session();
        session.complete_section(CheckoutSection::Contact);
        session.reset();

        assert_eq!(session.active_section, CheckoutSection::Contact);
        assert!(!session.is_completed(CheckoutSection::Contact));
        assert!(session.contact.email.is_empty());
        assert!(session.errors().is_empty());
    }
}
