use crate::core::{DailyAverage, RateQuery, RateStore};
use crate::domain::model::RateParams;
use crate::http::state::AppState;
use crate::utils::error::RateError;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

/// `GET /rates?date_from=&date_to=&origin=&destination=`
pub async fn get_rates<S: RateStore + 'static>(
    State(state): State<AppState<S>>,
    params: Result<Query<RateParams>, QueryRejection>,
) -> Result<Json<Vec<DailyAverage>>, RateError> {
    // 無法解析的 query string (例如重複的鍵) 視同缺少參數
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!("Unparseable query string: {}", rejection);
        RateError::MissingParameters
    })?;

    let query = RateQuery::from_params(params)?;
    let rows = state.engine.daily_rates(&query).await?;
    Ok(Json(rows))
}
