use actix_web::{
    body::BoxBody, delete, get, http::header::ContentType, post, web, HttpRequest, HttpResponse,
    Responder,
};
use serde::Serialize;

use crate::{
    consts::consts::PersonId,
    model::{
        action::{Action, ActionResult},
        person::Person,
    },
    store::store::PersonStore,
};

/// Every action answers `200 OK`. A lookup miss is written as an empty person (`{}`)
/// rather than a 404.
impl Responder for ActionResult {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            ActionResult::List(people) => json_line(&people),
            ActionResult::GetSingle(person) => json_line(&person.unwrap_or_default()),
        }
    }
}

/// JSON body terminated by a newline, the way a streaming JSON encoder writes it
fn json_line<T: Serialize>(value: &T) -> HttpResponse {
    match serde_json::to_vec(value) {
        Ok(mut body) => {
            body.push(b'\n');

            HttpResponse::Ok()
                .content_type(ContentType::json())
                .body(body)
        }
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

/// The `{id}` segment, percent-decoded. Bytes that are not valid UTF-8 become U+FFFD instead
/// of failing the match.
fn path_id(req: &HttpRequest) -> PersonId {
    PersonId::from(decode_segment(req.match_info().get("id").unwrap_or_default()))
}

fn decode_segment(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'%' && index + 2 < bytes.len() {
            let high = (bytes[index + 1] as char).to_digit(16);
            let low = (bytes[index + 2] as char).to_digit(16);

            if let (Some(high), Some(low)) = (high, low) {
                decoded.push((high * 16 + low) as u8);
                index += 3;
                continue;
            }
        }

        decoded.push(bytes[index]);
        index += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

/// Lists every person in the store
#[get("/people")]
async fn get_people(store: web::Data<PersonStore>) -> ActionResult {
    store.send_request(Action::List)
}

/// Returns the first person with the given id, `{}` if there is none
#[get("/people/{id}")]
async fn get_person(store: web::Data<PersonStore>, req: HttpRequest) -> ActionResult {
    store.send_request(Action::Get(path_id(&req)))
}

/// Appends a person decoded from the body, the id always comes from the path
#[post("/people/{id}")]
async fn create_person(
    store: web::Data<PersonStore>,
    req: HttpRequest,
    body: web::Bytes,
) -> ActionResult {
    let person = Person::from_json_body(&body).unwrap_or_else(|err| {
        log::debug!("Ignoring undecodable person body: {}", err);
        Person::default()
    });

    let person = person.with_id(path_id(&req));

    store.send_request(Action::Create(person))
}

#[delete("/people/{id}")]
async fn delete_person(store: web::Data<PersonStore>, req: HttpRequest) -> ActionResult {
    store.send_request(Action::Delete(path_id(&req)))
}

/// Registers the `/people` routes. Anything unmatched falls through to actix's default 404.
///
/// Request bodies are read whole with no size cap.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(usize::MAX))
        .service(get_people)
        .service(get_person)
        .service(create_person)
        .service(delete_person);
}
