//! # 직원 리포지토리 구현
//!
//! 직원 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `employees` 컬렉션에 대한 도메인 연산을 저장소 연산으로 변환합니다.
//!
//! ## 특징
//!
//! - **저장소 수준 유니크 제약**: `employee_id`의 유일성은 애플리케이션의
//!   사전 조회가 아니라 유니크 인덱스가 보장합니다. 삽입 시점의 인덱스 위반을
//!   감지하여 충돌 에러로 변환하므로, 동시 쓰기 환경에서 조회-후-삽입 사이의
//!   경쟁 구간이 존재하지 않습니다.
//! - **원자적 부분 수정**: `find_one_and_update` + `$set`으로 조회와 수정이
//!   문서 단위로 원자적으로 수행됩니다.
//! - **명시적 의존성 주입**: 전역 상태 없이 [`Database`] 핸들을 받아
//!   생성됩니다.

use log::info;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::Employee;
use crate::errors::AppError;

/// 직원 컬렉션 이름
const COLLECTION_NAME: &str = "employees";

/// MongoDB 중복 키 에러 코드 (유니크 인덱스 위반)
const DUPLICATE_KEY_ERROR_CODE: i32 = 11000;

/// 직원 데이터 액세스 리포지토리
///
/// `employees` 컬렉션에 대한 CRUD 연산을 담당합니다.
/// 모든 메서드는 `Result<T, AppError>`를 반환하며, 저장소 오류는
/// `DatabaseError`로, 유니크 제약 위반은 `ConflictError`로 변환됩니다.
/// 찾을 수 없음 조건은 `Option`/`bool`로 신호하고 도메인 에러로의 변환은
/// 서비스 계층이 담당합니다.
#[derive(Clone)]
pub struct EmployeeRepository {
    /// `employees` 컬렉션 핸들
    collection: Collection<Employee>,
}

impl EmployeeRepository {
    /// 데이터베이스 핸들로부터 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Employee>(COLLECTION_NAME),
        }
    }

    /// 새 직원 레코드를 삽입합니다.
    ///
    /// `joining_date`는 호출자가 이미 UTC 자정 인스턴트로 변환한 상태입니다.
    ///
    /// # Returns
    ///
    /// * `Ok(ObjectId)` - 저장소가 할당한 식별자
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - `employee_id` 유니크 인덱스 위반
    /// * `AppError::DatabaseError` - 기타 저장소 오류
    pub async fn insert(&self, employee: &Employee) -> Result<ObjectId, AppError> {
        let result = self.collection.insert_one(employee).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                AppError::ConflictError("employee_id already exists".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("삽입 결과에 ObjectId가 없습니다".to_string()))
    }

    /// 비즈니스 키로 직원을 조회합니다. 부수 효과가 없습니다.
    pub async fn find_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<Employee>, AppError> {
        self.collection
            .find_one(doc! { "employee_id": employee_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 저장소 식별자로 직원을 조회합니다 (생성 직후 재조회용).
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Employee>, AppError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 직원 목록을 조회합니다.
    ///
    /// 부서 정확 일치 필터(선택)를 적용하고 `joining_date` 내림차순으로
    /// 정렬하여 최대 `limit`개를 반환합니다. 동일한 `joining_date`의 순서는
    /// 저장소 기본 순서를 따릅니다.
    pub async fn list(
        &self,
        department: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Employee>, AppError> {
        let filter = list_filter(department);

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "joining_date": -1 })
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 제공된 필드만 덮어쓰는 부분 수정을 수행합니다.
    ///
    /// `$set` 연산자로 필드 단위 덮어쓰기를 수행하며(깊은 병합 아님),
    /// 조회와 수정은 `find_one_and_update`로 원자적으로 처리됩니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Employee))` - 수정 후의 전체 레코드
    /// * `Ok(None)` - 일치하는 `employee_id` 없음
    pub async fn update_partial(
        &self,
        employee_id: &str,
        update: Document,
    ) -> Result<Option<Employee>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "employee_id": employee_id }, doc! { "$set": update })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 비즈니스 키와 일치하는 레코드를 삭제합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 레코드가 삭제됨
    /// * `Ok(false)` - 일치하는 레코드 없음 (영향받은 행 0)
    pub async fn delete(&self, employee_id: &str) -> Result<bool, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "employee_id": employee_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스를 생성합니다.
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행하며, 멱등적입니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **비즈니스 키 유니크 인덱스**: `employee_id` (오름차순, UNIQUE) -
    ///    중복 생성 방지의 단일 권위
    /// 2. **입사일 인덱스**: `joining_date` (내림차순) - 목록 조회 정렬 지원
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let employee_id_index = IndexModel::builder()
            .keys(doc! { "employee_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("employee_id_unique".to_string())
                    .build(),
            )
            .build();

        let joining_date_index = IndexModel::builder()
            .keys(doc! { "joining_date": -1 })
            .options(
                IndexOptions::builder()
                    .name("joining_date_desc".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([employee_id_index, joining_date_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("인덱스 생성 완료: {} 컬렉션", COLLECTION_NAME);
        Ok(())
    }
}

/// 목록 조회용 필터 문서를 생성합니다.
fn list_filter(department: Option<&str>) -> Document {
    let mut filter = Document::new();
    if let Some(department) = department {
        filter.insert("department", department);
    }
    filter
}

/// 저장소 에러가 유니크 인덱스 위반(중복 키)인지 판별합니다.
fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_ERROR_CODE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_filter_without_department_is_empty() {
        assert!(list_filter(None).is_empty());
    }

    #[test]
    fn test_list_filter_with_department_matches_exactly() {
        let filter = list_filter(Some("Eng"));

        assert_eq!(filter.len(), 1);
        assert_eq!(filter.get_str("department").unwrap(), "Eng");
    }
}
