use serde::Serialize;

use crate::consts::consts::PersonId;

use super::decode::JsonNode;

/// A person record. Empty strings and a missing address are left out of the JSON entirely.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Person {
    #[serde(skip_serializing_if = "PersonId::is_empty")]
    pub id: PersonId,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firstname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lastname: String,
    /// `Some(Address::default())` is still written out as `{}`, only `None` is omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Address {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
}

impl Person {
    pub fn new(id: &str, firstname: &str, lastname: &str, address: Option<Address>) -> Self {
        Person {
            id: PersonId::from(id),
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            address,
        }
    }

    /// Reads the first JSON value in `body` as a person. Anything after that value is ignored.
    ///
    /// Only invalid JSON (or an empty body) is an error. Valid JSON is applied field by field:
    /// keys match without regard to ASCII case, the last of a repeated key wins, a value of the
    /// wrong type is skipped and unknown keys are ignored.
    pub fn from_json_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<JsonNode>();

        let node = match stream.next() {
            Some(node) => node?,
            None => return Err(serde::de::Error::custom("EOF while parsing a person")),
        };

        let mut person = Person::default();

        for (key, value) in node.into_fields() {
            if key.eq_ignore_ascii_case("id") {
                value.store_string(&mut person.id.0);
            } else if key.eq_ignore_ascii_case("firstname") {
                value.store_string(&mut person.firstname);
            } else if key.eq_ignore_ascii_case("lastname") {
                value.store_string(&mut person.lastname);
            } else if key.eq_ignore_ascii_case("address") {
                person.apply_address(value);
            }
        }

        Ok(person)
    }

    // `null` clears the address. An object is merged into the current one, and any other value
    // still leaves an (empty) address behind.
    fn apply_address(&mut self, value: JsonNode) {
        if value == JsonNode::Null {
            self.address = None;
            return;
        }

        let address = self.address.get_or_insert_with(Address::default);

        for (key, value) in value.into_fields() {
            if key.eq_ignore_ascii_case("city") {
                value.store_string(&mut address.city);
            } else if key.eq_ignore_ascii_case("state") {
                value.store_string(&mut address.state);
            }
        }
    }

    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = id;
        self
    }
}

impl Address {
    pub fn new(city: &str, state: &str) -> Self {
        Address {
            city: city.to_string(),
            state: state.to_string(),
        }
    }
}

#[cfg(test)]
impl Person {
    pub fn new_test() -> Self {
        Person::new("1", "First", "Last", Some(Address::new("City", "ST")))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    mod serialize {
        use super::*;

        #[test]
        fn full_person_writes_every_field() {
            let person = Person::new_test();

            assert_eq!(
                serde_json::to_value(&person).unwrap(),
                json!({
                    "id": "1",
                    "firstname": "First",
                    "lastname": "Last",
                    "address": { "city": "City", "state": "ST" }
                })
            );
        }

        #[test]
        fn missing_address_is_omitted() {
            let person = Person::new("2", "Roger", "Rabbit", None);

            let value = serde_json::to_value(&person).unwrap();

            assert_eq!(value, json!({ "id": "2", "firstname": "Roger", "lastname": "Rabbit" }));
            assert!(value.get("address").is_none());
        }

        #[test]
        fn empty_strings_are_omitted_recursively() {
            let person = Person::new("3", "", "Only", Some(Address::new("", "FL")));

            assert_eq!(
                serde_json::to_string(&person).unwrap(),
                r#"{"id":"3","lastname":"Only","address":{"state":"FL"}}"#
            );
        }

        #[test]
        fn supplied_empty_address_is_kept() {
            let person = Person::new("5", "", "", Some(Address::default()));

            assert_eq!(serde_json::to_string(&person).unwrap(), r#"{"id":"5","address":{}}"#);
        }

        #[test]
        fn default_person_is_an_empty_object() {
            assert_eq!(serde_json::to_string(&Person::default()).unwrap(), "{}");
        }
    }

    mod from_json_body {
        use super::*;

        #[test]
        fn reads_partial_person() {
            let person = Person::from_json_body(br#"{"firstname":"Bugs"}"#).unwrap();

            assert_eq!(person, Person::new("", "Bugs", "", None));
        }

        #[test]
        fn ignores_bytes_after_first_value() {
            let person = Person::from_json_body(br#"{"lastname":"Bunny"} trailing"#).unwrap();

            assert_eq!(person.lastname, "Bunny");
        }

        #[test]
        fn null_address_is_none() {
            let person = Person::from_json_body(br#"{"address":null}"#).unwrap();

            assert_eq!(person.address, None);
        }

        #[test]
        fn empty_body_is_an_error() {
            assert!(Person::from_json_body(b"").is_err());
            assert!(Person::from_json_body(b"   ").is_err());
        }

        #[test]
        fn malformed_body_is_an_error() {
            assert!(Person::from_json_body(b"{not json").is_err());
            assert!(Person::from_json_body(br#"{"firstname":"Bugs","#).is_err());
        }

        #[test]
        fn mistyped_field_is_skipped_and_the_rest_kept() {
            let person = Person::from_json_body(br#"{"firstname":"Bugs","lastname":5}"#).unwrap();

            assert_eq!(person, Person::new("", "Bugs", "", None));
        }

        #[test]
        fn keys_match_regardless_of_case() {
            let person = Person::from_json_body(
                br#"{"Firstname":"Bugs","LASTNAME":"Bunny","Address":{"CITY":"Brooklyn"}}"#,
            )
            .unwrap();

            assert_eq!(
                person,
                Person::new("", "Bugs", "Bunny", Some(Address::new("Brooklyn", "")))
            );
        }

        #[test]
        fn last_repeated_key_wins() {
            let person =
                Person::from_json_body(br#"{"firstname":"A","FirstName":"Bugs"}"#).unwrap();

            assert_eq!(person.firstname, "Bugs");
        }

        #[test]
        fn null_does_not_clear_a_string() {
            let person =
                Person::from_json_body(br#"{"lastname":"Bunny","lastname":null}"#).unwrap();

            assert_eq!(person.lastname, "Bunny");
        }

        #[test]
        fn repeated_address_objects_are_merged() {
            let person = Person::from_json_body(
                br#"{"address":{"city":"Brooklyn","state":1},"address":{"state":"NY"}}"#,
            )
            .unwrap();

            assert_eq!(person.address, Some(Address::new("Brooklyn", "NY")));
        }

        #[test]
        fn mistyped_address_leaves_an_empty_address() {
            let person = Person::from_json_body(br#"{"address":"Brooklyn"}"#).unwrap();

            assert_eq!(person.address, Some(Address::default()));
        }

        #[test]
        fn non_object_body_is_an_empty_person() {
            let bodies: [&[u8]; 4] = [b"null", b"[1,2]", b"\"Bugs\"", b"42"];

            for body in bodies {
                assert_eq!(Person::from_json_body(body).unwrap(), Person::default());
            }
        }
    }
}
