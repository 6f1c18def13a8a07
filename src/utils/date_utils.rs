//! 날짜 변환 유틸리티
//!
//! 외부 표현(달력 날짜 `YYYY-MM-DD`)과 내부 저장 표현(UTC 자정 인스턴트)
//! 사이의 변환을 담당합니다. 두 함수는 서로 정확한 역함수 관계에 있어,
//! 시간 성분이 없는 모든 유효한 날짜에 대해 저장 후 직렬화하면
//! 입력과 동일한 날짜 문자열이 복원됩니다.

use chrono::{NaiveDate, NaiveTime};
use mongodb::bson::DateTime;

/// 달력 날짜를 UTC 자정 인스턴트로 변환합니다.
///
/// 날짜 `D`는 `D`의 자정 시각에 UTC 태그를 붙인 인스턴트가 됩니다.
/// 타임존 변환 연산은 일절 적용하지 않습니다 (벽시계 시간 유지, 태그만 부착).
pub fn to_utc_midnight(date: NaiveDate) -> DateTime {
    let instant = date.and_time(NaiveTime::MIN).and_utc();
    DateTime::from_chrono(instant)
}

/// 저장된 인스턴트에서 달력 날짜 문자열(`YYYY-MM-DD`)을 복원합니다.
///
/// UTC 기준의 날짜 성분만 취하고 시간 성분은 버립니다.
pub fn to_date_string(instant: DateTime) -> String {
    instant.to_chrono().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(input: &str) -> String {
        let date = input.parse::<NaiveDate>().unwrap();
        to_date_string(to_utc_midnight(date))
    }

    #[test]
    fn test_roundtrip_identity() {
        assert_eq!(roundtrip("2023-01-15"), "2023-01-15");
        assert_eq!(roundtrip("1970-01-01"), "1970-01-01");
    }

    #[test]
    fn test_roundtrip_leap_day() {
        assert_eq!(roundtrip("2024-02-29"), "2024-02-29");
        assert_eq!(roundtrip("2000-02-29"), "2000-02-29");
    }

    #[test]
    fn test_roundtrip_year_boundaries() {
        assert_eq!(roundtrip("2023-12-31"), "2023-12-31");
        assert_eq!(roundtrip("2024-01-01"), "2024-01-01");
    }

    #[test]
    fn test_midnight_instant_is_utc_tagged() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let instant = to_utc_midnight(date).to_chrono();

        assert_eq!(instant.to_rfc3339(), "2023-06-01T00:00:00+00:00");
    }
}
