//! # Application Context
//!
//! 프로세스 수명 동안 공유되는 상태를 묶는 구조체입니다.
//! `main`에서 한 번 생성하여 `web::Data`로 감싼 뒤 모든 워커에 복제해 전달합니다.
//!
//! ```rust,ignore
//! let context = web::Data::new(AppContext::new());
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(context.clone())
//!         .configure(configure_all_routes)
//! })
//! ```
//!
//! 핸들러에서는 추출자로 받아 사용합니다.
//!
//! ```rust,ignore
//! #[get("/{id}")]
//! async fn get_user(ctx: web::Data<AppContext>, path: web::Path<String>) -> AppResult<HttpResponse> {
//!     let user = ctx.facade.get_user(&path);
//!     ...
//! }
//! ```

use crate::services::HbnbFacade;

#[derive(Debug, Default)]
pub struct AppContext {
    pub facade: HbnbFacade,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            facade: HbnbFacade::new(),
        }
    }
}
