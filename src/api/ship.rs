//! Ship API: create tag requests.

use std::sync::Arc;

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};

use crate::client::{execute, ClientConfig, ClientInner, PreparedRequest};
use crate::models::shipment::{CreateTagBody, RequestedShipment, ShippingChargesPayment};
use crate::models::{
    AccountNumber, CreateTagResponse, Item, PackagingType, PaymentType, Person, PickupType,
    ServiceType,
};
use crate::{Error, Result};

const CREATE_TAG_PATH: &str = "/ship/v1/shipments/tag";

/// Builder for a FedEx create tag request.
///
/// Setters only record values. Required fields are checked by
/// [`prepare`](Self::prepare), before any network call is made.
///
/// # Example
///
/// ```
/// use fedex_rest::api::CreateTagRequest;
/// use fedex_rest::models::{Address, Item, PackagingType, Person, PickupType, ServiceType, Weight};
///
/// # fn example() -> fedex_rest::Result<()> {
/// let request = CreateTagRequest::new()
///     .access_token("token")
///     .account_number("740561073")
///     .service_type(ServiceType::FedexGround)
///     .packaging_type(PackagingType::YourPackaging)
///     .pickup_type(PickupType::DropoffAtFedexLocation)
///     .recipients([Person::new("Lorem").with_address(Address::new().city("Boston"))])?
///     .shipper(Person::new("Ipsum").phone_number("1234567890"))
///     .line_items([Item::new("lorem Ipsum").with_weight(Weight::pounds(1))])?;
///
/// let prepared = request.prepare()?;
/// assert_eq!(
///     prepared.json["requestedShipment"]["recipients"][0]["address"]["city"],
///     "Boston"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct CreateTagRequest {
    access_token: Option<SecretString>,
    account_number: Option<AccountNumber>,
    service_type: Option<ServiceType>,
    packaging_type: Option<PackagingType>,
    pickup_type: Option<PickupType>,
    ship_datestamp: Option<NaiveDate>,
    shipper: Option<Person>,
    recipients: Vec<Person>,
    line_items: Vec<Item>,
    shipping_charges_payment: Option<PaymentType>,
    customer_transaction_id: Option<String>,
    config: ClientConfig,
}

impl CreateTagRequest {
    /// Create an empty request using the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bearer token used to submit the request.
    pub fn access_token(self, token: impl Into<String>) -> Self {
        self.with_access_token_secret(SecretString::from(token.into()))
    }

    fn with_access_token_secret(mut self, token: SecretString) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Set the FedEx account the shipment is billed to.
    pub fn account_number(mut self, account: impl Into<AccountNumber>) -> Self {
        self.account_number = Some(account.into());
        self
    }

    /// Set the service type.
    pub fn service_type(mut self, service_type: ServiceType) -> Self {
        self.service_type = Some(service_type);
        self
    }

    /// Set the packaging type.
    pub fn packaging_type(mut self, packaging_type: PackagingType) -> Self {
        self.packaging_type = Some(packaging_type);
        self
    }

    /// Set the pickup type.
    pub fn pickup_type(mut self, pickup_type: PickupType) -> Self {
        self.pickup_type = Some(pickup_type);
        self
    }

    /// Set the ship date.
    pub fn ship_datestamp(mut self, date: NaiveDate) -> Self {
        self.ship_datestamp = Some(date);
        self
    }

    /// Set the shipper.
    pub fn shipper(mut self, shipper: Person) -> Self {
        self.shipper = Some(shipper);
        self
    }

    /// Set the recipients, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `recipients` is empty.
    pub fn recipients<I>(mut self, recipients: I) -> Result<Self>
    where
        I: IntoIterator<Item = Person>,
    {
        let recipients: Vec<Person> = recipients.into_iter().collect();
        if recipients.is_empty() {
            return Err(Error::InvalidInput(
                "At least one recipient is required".to_string(),
            ));
        }
        self.recipients = recipients;
        Ok(self)
    }

    /// Set the package line items, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `items` is empty.
    pub fn line_items<I>(mut self, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = Item>,
    {
        let items: Vec<Item> = items.into_iter().collect();
        if items.is_empty() {
            return Err(Error::InvalidInput(
                "At least one line item is required".to_string(),
            ));
        }
        self.line_items = items;
        Ok(self)
    }

    /// Set who pays the shipping charges.
    pub fn shipping_charges_payment(mut self, payment_type: PaymentType) -> Self {
        self.shipping_charges_payment = Some(payment_type);
        self
    }

    /// Attach a caller-chosen id, echoed back by FedEx.
    pub fn customer_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.customer_transaction_id = Some(id.into());
        self
    }

    /// Use the given configuration for environment, locale and timeouts.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// The account number, if set.
    pub fn get_account_number(&self) -> Option<&AccountNumber> {
        self.account_number.as_ref()
    }

    /// The service type, if set.
    pub fn get_service_type(&self) -> Option<ServiceType> {
        self.service_type
    }

    /// The packaging type, if set.
    pub fn get_packaging_type(&self) -> Option<PackagingType> {
        self.packaging_type
    }

    /// The pickup type, if set.
    pub fn get_pickup_type(&self) -> Option<PickupType> {
        self.pickup_type
    }

    /// The ship date, if set.
    pub fn get_ship_datestamp(&self) -> Option<NaiveDate> {
        self.ship_datestamp
    }

    /// The shipper, if set.
    pub fn get_shipper(&self) -> Option<&Person> {
        self.shipper.as_ref()
    }

    /// The recipients, in the order they were given.
    pub fn get_recipients(&self) -> &[Person] {
        &self.recipients
    }

    /// The line items, in the order they were given.
    pub fn get_line_items(&self) -> &[Item] {
        &self.line_items
    }

    /// Build the HTTP request without sending it.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingAccountNumber`] if no account number is set.
    /// - [`Error::MissingAuthCredentials`] if no access token is set.
    pub fn prepare(&self) -> Result<PreparedRequest> {
        let account_number = self
            .account_number
            .as_ref()
            .ok_or(Error::MissingAccountNumber)?;
        let token = self
            .access_token
            .as_ref()
            .map(|t| t.expose_secret())
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingAuthCredentials("access token is required"))?;

        let url = self.config.environment.endpoint(CREATE_TAG_PATH)?;

        let mut headers = HeaderMap::new();
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-locale",
            HeaderValue::from_str(&self.config.locale)
                .map_err(|_| Error::InvalidInput("Invalid locale".to_string()))?,
        );
        if let Some(ref id) = self.customer_transaction_id {
            headers.insert(
                "x-customer-transaction-id",
                HeaderValue::from_str(id).map_err(|_| {
                    Error::InvalidInput("Invalid customer transaction id".to_string())
                })?,
            );
        }

        let body = CreateTagBody {
            requested_shipment: RequestedShipment {
                shipper: self.shipper.as_ref(),
                recipients: &self.recipients,
                pickup_type: self.pickup_type,
                service_type: self.service_type,
                packaging_type: self.packaging_type,
                ship_datestamp: self.ship_datestamp,
                shipping_charges_payment: self
                    .shipping_charges_payment
                    .map(|payment_type| ShippingChargesPayment { payment_type }),
                requested_package_line_items: &self.line_items,
            },
            account_number,
        };

        Ok(PreparedRequest {
            method: Method::POST,
            url,
            headers,
            json: serde_json::to_value(&body)?,
        })
    }

    /// Prepare and send the request, returning the decoded response.
    ///
    /// Uses a fresh HTTP client built from this request's config. Transport
    /// errors are returned as-is; nothing is retried.
    pub async fn request(&self) -> Result<CreateTagResponse> {
        let prepared = self.prepare()?;
        let http = self.config.http_client()?;
        self.send(prepared, |prepared| {
            execute::<CreateTagResponse>(&http, prepared)
        })
        .await
    }

    async fn send<F, Fut>(&self, prepared: PreparedRequest, transport: F) -> Result<CreateTagResponse>
    where
        F: FnOnce(PreparedRequest) -> Fut,
        Fut: std::future::Future<Output = Result<CreateTagResponse>>,
    {
        tracing::debug!(
            url = %prepared.url,
            account = %self.account_number.as_ref().map(|a| a.as_str()).unwrap_or_default(),
            recipients = self.recipients.len(),
            "Submitting create tag request"
        );
        let response = transport(prepared).await?;
        tracing::info!(transaction_id = %response.transaction_id, "Tag created");
        Ok(response)
    }
}

impl std::fmt::Debug for CreateTagRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateTagRequest")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("account_number", &self.account_number)
            .field("service_type", &self.service_type)
            .field("packaging_type", &self.packaging_type)
            .field("pickup_type", &self.pickup_type)
            .field("ship_datestamp", &self.ship_datestamp)
            .field("shipper", &self.shipper)
            .field("recipients", &self.recipients)
            .field("line_items", &self.line_items)
            .field("shipping_charges_payment", &self.shipping_charges_payment)
            .field("customer_transaction_id", &self.customer_transaction_id)
            .field("config", &self.config)
            .finish()
    }
}

/// Service for Ship API operations.
///
/// Obtained from [`FedexClient::ship`](crate::FedexClient::ship). Tokens
/// come from the client's session and the client's config replaces the
/// request's own.
pub struct ShipService {
    inner: Arc<ClientInner>,
}

impl ShipService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a tag (label) for a shipment.
    ///
    /// The account number is checked before any token exchange.
    pub async fn create_tag(&self, request: CreateTagRequest) -> Result<CreateTagResponse> {
        if request.account_number.is_none() {
            return Err(Error::MissingAccountNumber);
        }

        let token = self.inner.session.access_token().await?;
        let request = request
            .with_config(self.inner.config.clone())
            .with_access_token_secret(token);
        let prepared = request.prepare()?;

        request
            .send(prepared, |prepared| {
                self.inner.execute::<CreateTagResponse>(prepared)
            })
            .await
    }
}
