//! Terminal rendering of workflow snapshots and profile data

use chrono::Local;
use domain::{ProfileEntry, RouteResult, UserProfile, WorkflowState};

/// Number of polyline points printed before the list is elided
const POLYLINE_PREVIEW: usize = 4;

/// Status line prefixed with the wall-clock time
pub fn timestamped_status(state: &WorkflowState) -> Option<String> {
    let status = state.status?;
    let marker = if status.is_error() { "!" } else { "·" };
    Some(format!(
        "[{}] {marker} {}",
        Local::now().format("%H:%M:%S"),
        status.text()
    ))
}

/// Route panel: endpoints and a preview of the polyline
pub fn route_panel(route: &RouteResult) -> Vec<String> {
    let mut lines = vec![
        format!("출발지: {}", route.origin),
        format!("도착지: {}", route.destination),
        format!("경로: {} 지점", route.len()),
    ];

    let preview: Vec<String> = route
        .polyline
        .iter()
        .take(POLYLINE_PREVIEW)
        .map(ToString::to_string)
        .collect();
    let ellipsis = if route.len() > POLYLINE_PREVIEW { " …" } else { "" };
    lines.push(format!("  {}{ellipsis}", preview.join(" → ")));

    lines
}

/// Full call screen: status, route and taxi panels
pub fn render_state(state: &WorkflowState) -> String {
    let mut lines = Vec::new();

    if let Some(status) = state.status {
        lines.push(status.text());
    }
    if let Some(route) = &state.route {
        lines.push(String::new());
        lines.extend(route_panel(route));
    }
    if let Some(taxi) = &state.taxi {
        lines.push(String::new());
        lines.extend(taxi.panel_lines());
    }
    if lines.is_empty() {
        lines.push("도착지를 입력하세요.".to_string());
    }

    lines.join("\n")
}

/// Profile page
pub fn render_profile(profile: &UserProfile) -> String {
    let age = profile
        .age
        .map_or_else(|| "-".to_string(), |age| age.to_string());
    let protector = profile.represent_protector.as_ref().map_or_else(
        || "-".to_string(),
        |p| format!("{} <{}>", p.name, p.email),
    );

    [
        format!("아이디: {}", profile.login_id),
        format!("이름: {}", profile.name),
        format!("성별: {}", profile.gender),
        format!("전화번호: {}", profile.phone),
        format!("나이: {age}"),
        format!("대표 보호자: {protector}"),
        format!(
            "대표 주소: {}",
            profile.represent_address.as_deref().unwrap_or("-")
        ),
    ]
    .join("\n")
}

/// Numbered list of locally registered entries
pub fn render_entries(entries: &[ProfileEntry]) -> String {
    if entries.is_empty() {
        return "새로 추가한 정보가 없습니다.".to_string();
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}", i + 1, entry.summary()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{
        Coordinate, NewProtector, RequestId, RoadSegment, RouteRequest, StatusMessage,
        TaxiAssignment,
    };

    fn route(points: usize) -> RouteResult {
        let vertexes: Vec<f64> = (0..points)
            .flat_map(|i| [126.65 + i as f64 * 0.001, 37.44])
            .collect();
        let request = RouteRequest::new(
            Coordinate::inha_university(),
            Coordinate::new(126.7, 37.45).unwrap(),
        );
        RouteResult::from_segments(&request, &[RoadSegment::new(vertexes)]).unwrap()
    }

    fn taxi() -> TaxiAssignment {
        TaxiAssignment {
            license_number: "인천 12가 3456".to_string(),
            driver_name: "김기사".to_string(),
            driver_phone: "010-1234-5678".to_string(),
            eta_seconds: 125,
            fare: 5000,
        }
    }

    #[test]
    fn empty_state_prompts_for_destination() {
        assert_eq!(render_state(&WorkflowState::default()), "도착지를 입력하세요.");
        assert!(timestamped_status(&WorkflowState::default()).is_none());
    }

    #[test]
    fn full_state_shows_all_panels() {
        let state = WorkflowState::with_route(RequestId::new(1), route(2))
            .with_taxi(taxi())
            .unwrap();

        let text = render_state(&state);
        assert!(text.contains("경로: 2 지점"));
        assert!(text.contains("택시 번호: 인천 12가 3456"));
        assert!(text.contains("택시 도착 예정 시간: 3 분 후"));
        assert!(text.contains("예상 요금: 5000 원"));
    }

    #[test]
    fn long_polyline_is_elided() {
        let lines = route_panel(&route(10));
        assert!(lines.last().unwrap().ends_with('…'));

        let lines = route_panel(&route(2));
        assert!(!lines.last().unwrap().ends_with('…'));
    }

    #[test]
    fn error_status_is_marked() {
        let state = WorkflowState::default().with_status(None, StatusMessage::AddressNotFound);
        let line = timestamped_status(&state).unwrap();
        assert!(line.contains(" ! "));
        assert!(line.contains("주소를 다시 확인하세요."));
    }

    #[test]
    fn profile_with_missing_fields() {
        let profile = UserProfile {
            login_id: "inha01".to_string(),
            name: "홍길동".to_string(),
            ..UserProfile::default()
        };
        let text = render_profile(&profile);
        assert!(text.contains("나이: -"));
        assert!(text.contains("대표 보호자: -"));
        assert!(text.contains("대표 주소: -"));
    }

    #[test]
    fn entries_are_numbered() {
        let entries = vec![ProfileEntry::Protector(NewProtector {
            protector_name: "김보호".to_string(),
            protector_email: "kim@example.com".to_string(),
        })];
        assert_eq!(
            render_entries(&entries),
            "1. 보호자 김보호 <kim@example.com>"
        );
        assert_eq!(render_entries(&[]), "새로 추가한 정보가 없습니다.");
    }
}
