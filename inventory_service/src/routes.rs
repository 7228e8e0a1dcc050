//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
use actix_web::{get, web, HttpResponse, Responder};
use log::*;

use crate::{api::InventoryApi, errors::InventoryServerError, traits::StockStore};

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
    trace!("🗃️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

// ----------------------------------------------   Stock  ----------------------------------------------------
route!(check_stock => Get "/inventory/{item_id}/check" impl StockStore);
/// Route handler for the stock check endpoint
///
/// Looks up the stock count for the item in the path and reports its availability:
/// * `200` - the item exists; the body carries `available` or `out_of_stock` plus the quantity.
/// * `404` - no inventory record exists for the item.
/// * `500` - the store failed; the body is generic and the cause is only logged.
///
/// The check never mutates stock. This route is unauthenticated.
pub async fn check_stock<S: StockStore>(
    path: web::Path<String>,
    api: web::Data<InventoryApi<S>>,
) -> Result<HttpResponse, InventoryServerError> {
    let item_id = path.into_inner();
    debug!("🗃️ GET stock check for item [{item_id}]");
    let report = api.stock_report(&item_id).await?;
    Ok(HttpResponse::Ok().json(report))
}
