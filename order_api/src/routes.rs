//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Handlers are `async` and must never block the worker thread: the upstream credit and stock
//! calls are awaited, so other requests keep flowing while a decision is in flight.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use order_flow::{CreditCheck, NewOrder, OrderDecision, OrderFlowApi, StockCheck};

use crate::{
    data_objects::{OrderConfirmed, OrderDeclined},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(create_order => Post "/api/orders" impl CreditCheck, StockCheck);
/// Route handler for the order creation endpoint
///
/// Accepts a JSON body with `userId` and `itemId` and runs the order through the credit and
/// stock checks. The outcome maps onto the status code:
/// * `201` - both checks passed and the order is confirmed.
/// * `402` - the user service declined the credit check.
/// * `409` - the item is known but out of stock.
/// * `400` - the body was not valid JSON, or either id was missing or empty.
/// * `503` - an upstream service could not be reached, timed out, or answered garbage.
///
/// This route is unauthenticated.
pub async fn create_order<C, S>(
    body: web::Bytes,
    api: web::Data<OrderFlowApi<C, S>>,
) -> Result<HttpResponse, ServerError>
where
    C: CreditCheck,
    S: StockCheck,
{
    let order = serde_json::from_slice::<NewOrder>(&body).map_err(|e| {
        debug!("💻️ Could not deserialize order request. {e}");
        ServerError::CouldNotDeserializePayload
    })?;
    debug!("💻️ New order request for user [{}], item [{}]", order.user_id, order.item_id);
    let decision = api.process_order(&order).await?;
    let response = match decision {
        OrderDecision::Confirmed { user_id, item_id, user_service_version } => {
            info!("💻️ Order confirmed for user [{user_id}], item [{item_id}]");
            HttpResponse::Created().json(OrderConfirmed::new(user_id, item_id, user_service_version))
        },
        OrderDecision::InsufficientCredit { user_service_version } => {
            info!("💻️ Order declined for user [{}]. Insufficient credit.", order.user_id);
            HttpResponse::PaymentRequired().json(OrderDeclined::insufficient_credit(user_service_version))
        },
        OrderDecision::OutOfStock => {
            info!("💻️ Order declined for user [{}]. Item [{}] is out of stock.", order.user_id, order.item_id);
            HttpResponse::Conflict().json(OrderDeclined::out_of_stock())
        },
    };
    Ok(response)
}
