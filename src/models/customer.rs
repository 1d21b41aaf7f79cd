use crate::entities::customers::{ActiveModel, Entity, Model};
use crate::traits::{CRUDResource, MergeIntoActiveModel};
use crate::validation::{
    Validatable, ValidationError, ValidationErrors,
    validators::{validate_max_chars, validate_optional_max_chars, validate_required},
};
use async_trait::async_trait;
use sea_orm::{ActiveValue, DbErr};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Column widths of the Customers table
const CUSTOMER_ID_LEN: usize = 5;
const COMPANY_NAME_LEN: usize = 40;
const CONTACT_LEN: usize = 30;
const ADDRESS_LEN: usize = 60;
const PLACE_LEN: usize = 15;
const POSTAL_CODE_LEN: usize = 10;
const PHONE_LEN: usize = 24;

/// A Northwind customer as exposed over HTTP.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[schema(example = "ALFKI")]
    pub customer_id: String,
    #[schema(example = "Alfreds Futterkiste")]
    pub company_name: String,
    #[schema(example = "Maria Anders")]
    pub contact_name: Option<String>,
    #[schema(example = "Sales Representative")]
    pub contact_title: Option<String>,
    #[schema(example = "Obere Str. 57")]
    pub address: Option<String>,
    #[schema(example = "Berlin")]
    pub city: Option<String>,
    #[schema(example = "NULL")]
    pub region: Option<String>,
    #[schema(example = "12209")]
    pub postal_code: Option<String>,
    #[schema(example = "Germany")]
    pub country: Option<String>,
    #[schema(example = "030-0074321")]
    pub phone: Option<String>,
    #[schema(example = "030-0076545")]
    pub fax: Option<String>,
}

impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Customer {
            // `CustomerID` is char(5); postgres pads shorter ids with spaces
            customer_id: model.customer_id.trim_end().to_string(),
            company_name: model.company_name,
            contact_name: model.contact_name,
            contact_title: model.contact_title,
            address: model.address,
            city: model.city,
            region: model.region,
            postal_code: model.postal_code,
            country: model.country,
            phone: model.phone,
            fax: model.fax,
        }
    }
}

/// Body of `POST /customers`. Only `customerId` and `companyName` are required.
#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    #[schema(example = "ALFKI")]
    pub customer_id: String,
    #[schema(example = "Alfreds Futterkiste")]
    pub company_name: String,
    pub contact_name: Option<String>,
    pub contact_title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

impl From<CustomerCreate> for ActiveModel {
    fn from(create: CustomerCreate) -> Self {
        ActiveModel {
            customer_id: ActiveValue::Set(create.customer_id),
            company_name: ActiveValue::Set(create.company_name),
            contact_name: ActiveValue::Set(create.contact_name),
            contact_title: ActiveValue::Set(create.contact_title),
            address: ActiveValue::Set(create.address),
            city: ActiveValue::Set(create.city),
            region: ActiveValue::Set(create.region),
            postal_code: ActiveValue::Set(create.postal_code),
            country: ActiveValue::Set(create.country),
            phone: ActiveValue::Set(create.phone),
            fax: ActiveValue::Set(create.fax),
        }
    }
}

impl Validatable for CustomerCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_required("customerId", &self.customer_id));
        errors.check(validate_max_chars("customerId", &self.customer_id, CUSTOMER_ID_LEN));
        errors.check(validate_required("companyName", &self.company_name));
        errors.check(validate_max_chars("companyName", &self.company_name, COMPANY_NAME_LEN));
        check_optional_lengths(
            &mut errors,
            [
                ("contactName", self.contact_name.as_deref(), CONTACT_LEN),
                ("contactTitle", self.contact_title.as_deref(), CONTACT_LEN),
                ("address", self.address.as_deref(), ADDRESS_LEN),
                ("city", self.city.as_deref(), PLACE_LEN),
                ("region", self.region.as_deref(), PLACE_LEN),
                ("postalCode", self.postal_code.as_deref(), POSTAL_CODE_LEN),
                ("country", self.country.as_deref(), PLACE_LEN),
                ("phone", self.phone.as_deref(), PHONE_LEN),
                ("fax", self.fax.as_deref(), PHONE_LEN),
            ],
        );
        errors.result()
    }
}

/// Body of `PUT /customers/{id}`.
///
/// Every field is optional. An absent field keeps its stored value, a present
/// value overwrites it and an explicit `null` clears a nullable column.
/// `customerId` and unknown fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, example = "Alfreds Futterkiste")]
    pub company_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub contact_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub contact_title: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, example = "Berlin")]
    pub city: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub region: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub postal_code: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub country: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub fax: Option<Option<String>>,
}

impl Validatable for CustomerUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        match &self.company_name {
            Some(None) => errors.add(ValidationError::new("companyName", "Cannot be null")),
            Some(Some(name)) => {
                errors.check(validate_required("companyName", name));
                errors.check(validate_max_chars("companyName", name, COMPANY_NAME_LEN));
            }
            None => {}
        }
        check_optional_lengths(
            &mut errors,
            [
                ("contactName", flatten(&self.contact_name), CONTACT_LEN),
                ("contactTitle", flatten(&self.contact_title), CONTACT_LEN),
                ("address", flatten(&self.address), ADDRESS_LEN),
                ("city", flatten(&self.city), PLACE_LEN),
                ("region", flatten(&self.region), PLACE_LEN),
                ("postalCode", flatten(&self.postal_code), POSTAL_CODE_LEN),
                ("country", flatten(&self.country), PLACE_LEN),
                ("phone", flatten(&self.phone), PHONE_LEN),
                ("fax", flatten(&self.fax), PHONE_LEN),
            ],
        );
        errors.result()
    }
}

impl MergeIntoActiveModel<ActiveModel> for CustomerUpdate {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> Result<ActiveModel, DbErr> {
        self.validate()
            .map_err(|errors| DbErr::Custom(errors.to_string()))?;

        if let Some(Some(company_name)) = self.company_name {
            existing.company_name = ActiveValue::Set(company_name);
        }
        merge_nullable(&mut existing.contact_name, self.contact_name);
        merge_nullable(&mut existing.contact_title, self.contact_title);
        merge_nullable(&mut existing.address, self.address);
        merge_nullable(&mut existing.city, self.city);
        merge_nullable(&mut existing.region, self.region);
        merge_nullable(&mut existing.postal_code, self.postal_code);
        merge_nullable(&mut existing.country, self.country);
        merge_nullable(&mut existing.phone, self.phone);
        merge_nullable(&mut existing.fax, self.fax);
        Ok(existing)
    }
}

fn merge_nullable(target: &mut ActiveValue<Option<String>>, incoming: Option<Option<String>>) {
    if let Some(value) = incoming {
        *target = ActiveValue::Set(value);
    }
}

fn flatten(value: &Option<Option<String>>) -> Option<&str> {
    value.as_ref().and_then(Option::as_deref)
}

fn check_optional_lengths<const N: usize>(
    errors: &mut ValidationErrors,
    fields: [(&str, Option<&str>, usize); N],
) {
    for (field, value, max) in fields {
        errors.check(validate_optional_max_chars(field, value, max));
    }
}

#[async_trait]
impl CRUDResource for Customer {
    type EntityType = Entity;
    type ActiveModelType = ActiveModel;
    type CreateModel = CustomerCreate;
    type UpdateModel = CustomerUpdate;
    type KeyType = String;

    const RESOURCE_NAME_SINGULAR: &'static str = "Customer";
    const RESOURCE_NAME_PLURAL: &'static str = "Customers";
    const TABLE_NAME: &'static str = "Customers";
}
