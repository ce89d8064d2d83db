// src/services/dashboard_service.rs

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::{
        booking::BookingStatus,
        dashboard::{
            DailyBookingEntry, DailyCountRow, DashboardSummary, LatestBookingEntry,
            MonthlyRevenueEntry, MonthlyRevenueRow, ServicePopularity, TopSpenderEntry,
        },
    },
};

pub const DEFAULT_DAILY_WINDOW: u32 = 30;
pub const DEFAULT_MONTHLY_WINDOW: u32 = 12;
pub const DEFAULT_TOP_SERVICES: i64 = 5;
pub const DEFAULT_TOP_SPENDERS: i64 = 10;
pub const DEFAULT_LATEST_BOOKINGS: i64 = 10;

// ---
// Densificação (pura): gera a sequência completa de chaves do calendário
// e procura as linhas esparsas nela — nunca confiar no GROUP BY para
// produzir os buckets vazios.
// ---

fn fill_daily_series(end: NaiveDate, window_days: u32, rows: &[DailyCountRow]) -> Vec<DailyBookingEntry> {
    let by_day: HashMap<NaiveDate, i64> = rows.iter().map(|r| (r.day, r.count)).collect();

    (0..i64::from(window_days))
        .rev()
        .map(|offset| {
            let date = end - Duration::days(offset);
            DailyBookingEntry {
                date,
                count: by_day.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Janela de meses terminando em (end_year, end_month), em ordem crescente.
fn month_keys(end_year: i32, end_month: u32, window_months: u32) -> Vec<(i32, u32)> {
    let mut keys = Vec::with_capacity(window_months as usize);
    let (mut year, mut month) = (end_year, end_month);
    for _ in 0..window_months {
        keys.push((year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }
    keys.reverse();
    keys
}

fn fill_monthly_series(
    end_year: i32,
    end_month: u32,
    window_months: u32,
    rows: &[MonthlyRevenueRow],
) -> Vec<MonthlyRevenueEntry> {
    let by_month: HashMap<(i32, u32), Decimal> = rows
        .iter()
        .map(|r| ((r.year, r.month as u32), r.total))
        .collect();

    month_keys(end_year, end_month, window_months)
        .into_iter()
        .map(|(year, month)| MonthlyRevenueEntry {
            year_month: format!("{year:04}-{month:02}"),
            total: by_month.get(&(year, month)).copied().unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Base vazia vira o sentinela `NoData`, nunca uma lista vazia.
fn rank_services(rows: Vec<crate::models::dashboard::ServicePopularityEntry>) -> ServicePopularity {
    if rows.is_empty() {
        ServicePopularity::NoData
    } else {
        ServicePopularity::Ranked(rows)
    }
}

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn get_summary<'e, E>(&self, executor: E) -> Result<DashboardSummary, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        self.repo.get_summary(executor).await
    }

    /// Série densa de bookings por dia: exatamente N pontos, datas
    /// crescentes, dias sem booking com count = 0. Timezone de
    /// relatório: UTC.
    pub async fn daily_booking_counts<'e, E>(
        &self,
        executor: E,
        window_days: Option<u32>,
        status: Option<BookingStatus>,
    ) -> Result<Vec<DailyBookingEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let window = window_days.unwrap_or(DEFAULT_DAILY_WINDOW).clamp(1, 366);
        let today = Utc::now().date_naive();
        let since = today - Duration::days(i64::from(window) - 1);

        let rows = self.repo.daily_booking_counts(executor, since, status).await?;
        Ok(fill_daily_series(today, window, &rows))
    }

    /// Série densa de receita por mês (somente pagamentos `paid`),
    /// M entradas terminando no mês corrente.
    pub async fn monthly_revenue<'e, E>(
        &self,
        executor: E,
        window_months: Option<u32>,
    ) -> Result<Vec<MonthlyRevenueEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let window = window_months.unwrap_or(DEFAULT_MONTHLY_WINDOW).clamp(1, 120);
        let today = Utc::now().date_naive();

        let keys = month_keys(today.year(), today.month(), window);
        let (first_year, first_month) = keys[0];
        // Limite inferior da consulta: primeiro instante do primeiro mês
        let since = Utc
            .with_ymd_and_hms(first_year, first_month, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| anyhow::anyhow!("data inicial da janela inválida"))?;

        let rows = self.repo.monthly_revenue(executor, since).await?;
        Ok(fill_monthly_series(today.year(), today.month(), window, &rows))
    }

    pub async fn top_services<'e, E>(
        &self,
        executor: E,
        limit: Option<i64>,
    ) -> Result<ServicePopularity, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let limit = limit.unwrap_or(DEFAULT_TOP_SERVICES).clamp(1, 50);
        let rows = self.repo.top_services(executor, limit).await?;
        Ok(rank_services(rows))
    }

    pub async fn top_spenders<'e, E>(
        &self,
        executor: E,
        limit: Option<i64>,
    ) -> Result<Vec<TopSpenderEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let limit = limit.unwrap_or(DEFAULT_TOP_SPENDERS).clamp(1, 100);
        self.repo.top_spenders(executor, limit).await
    }

    pub async fn latest_bookings<'e, E>(
        &self,
        executor: E,
        limit: Option<i64>,
    ) -> Result<Vec<LatestBookingEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let limit = limit.unwrap_or(DEFAULT_LATEST_BOOKINGS).clamp(1, 100);
        self.repo.latest_bookings(executor, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::ServicePopularityEntry;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_series_has_exactly_n_dense_ascending_points() {
        let end = date(2025, 8, 25);
        let series = fill_daily_series(end, 30, &[]);

        assert_eq!(series.len(), 30);
        assert_eq!(series[0].date, date(2025, 7, 27));
        assert_eq!(series[29].date, end);
        for window in series.windows(2) {
            assert_eq!(window[1].date - window[0].date, Duration::days(1));
        }
        assert!(series.iter().all(|p| p.count == 0));
    }

    #[test]
    fn daily_series_places_sparse_counts_at_right_index() {
        // Bookings apenas no dia 3 (count 2) e no dia 10 (count 5)
        let end = date(2025, 8, 30);
        let start = end - Duration::days(29);
        let rows = vec![
            DailyCountRow { day: start + Duration::days(3), count: 2 },
            DailyCountRow { day: start + Duration::days(10), count: 5 },
        ];

        let series = fill_daily_series(end, 30, &rows);

        assert_eq!(series.len(), 30);
        assert_eq!(series[3].count, 2);
        assert_eq!(series[10].count, 5);
        let filled: i64 = series.iter().map(|p| p.count).sum();
        assert_eq!(filled, 7); // todo o resto é zero
    }

    #[test]
    fn daily_series_single_day_window() {
        let end = date(2025, 1, 1);
        let rows = vec![DailyCountRow { day: end, count: 4 }];
        let series = fill_daily_series(end, 1, &rows);
        assert_eq!(series, vec![DailyBookingEntry { date: end, count: 4 }]);
    }

    #[test]
    fn month_keys_cross_year_boundary() {
        assert_eq!(
            month_keys(2025, 2, 4),
            vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]
        );
    }

    #[test]
    fn monthly_series_zero_fills_missing_months() {
        let rows = vec![MonthlyRevenueRow {
            year: 2025,
            month: 1,
            total: Decimal::new(500_000_00, 2),
        }];

        let series = fill_monthly_series(2025, 3, 12, &rows);

        assert_eq!(series.len(), 12);
        assert_eq!(series[0].year_month, "2024-04");
        assert_eq!(series[11].year_month, "2025-03");

        let jan = series.iter().find(|e| e.year_month == "2025-01").unwrap();
        assert_eq!(jan.total, Decimal::new(500_000_00, 2));
        assert!(
            series
                .iter()
                .filter(|e| e.year_month != "2025-01")
                .all(|e| e.total == Decimal::ZERO)
        );
    }

    #[test]
    fn empty_popularity_returns_sentinel_not_empty_list() {
        assert_eq!(rank_services(vec![]), ServicePopularity::NoData);
    }

    #[test]
    fn popularity_preserves_repo_ranking() {
        let rows = vec![
            ServicePopularityEntry { service_name: "Limpeza Pesada".into(), total_quantity: 9 },
            ServicePopularityEntry { service_name: "Limpeza Padrão".into(), total_quantity: 4 },
        ];
        match rank_services(rows.clone()) {
            ServicePopularity::Ranked(entries) => assert_eq!(entries, rows),
            ServicePopularity::NoData => panic!("não deveria ser sentinela com dados"),
        }
    }
}
