use navstack_history::paths;
use navstack_router::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq)]
pub struct Doc {
    id: u32,
}

paths! {
    pub Paths {
        Home => "/" : (),
        Docs => "/docs" : Doc,
        Settings => "/settings" : (),
    }
}

fn navigator(mode: OutletMode) -> Navigator<Paths> {
    Navigator::from_config(
        NavigatorConfig::default()
            .initial_location(Home, ())
            .outlet_mode(mode),
    )
}

fn register(switch: &Switch<Paths, String>) -> Vec<RouteHandle> {
    vec![
        switch.register_route(Home, |_| "home".to_string()).unwrap(),
        switch
            .register_route(Docs, |doc| format!("doc {}", doc.id))
            .unwrap(),
    ]
}

#[test]
fn duplicate_routes_are_rejected() {
    let switch = Switch::<Paths, String>::new(OutletMode::Simple);
    let _routes = register(&switch);

    let err = switch
        .register_route(Docs, |_| String::new())
        .unwrap_err();
    assert_eq!(err, RouterError::DuplicateRoute { path: "/docs" });
    assert_eq!(err.to_string(), r#"route with path "/docs" already exists"#);
    assert_eq!(switch.paths(), vec!["/", "/docs"]);
}

#[test]
fn unregistering_frees_the_path() {
    let switch = Switch::<Paths, String>::new(OutletMode::Simple);
    let mut routes = register(&switch);

    let docs = routes.pop().unwrap();
    assert_eq!(docs.path(), "/docs");
    assert!(docs.unregister());
    assert_eq!(switch.paths(), vec!["/"]);

    let again = switch.register_route(Docs, |_| "again".to_string()).unwrap();
    drop(switch);
    assert!(!again.unregister());
}

#[test]
fn simple_outlet_renders_the_current_route() {
    let navigator = navigator(OutletMode::Simple);
    let provider = navigator.provider();
    let switch = navigator.switch::<String>();
    let _routes = register(&switch);

    assert_eq!(
        switch.render(&provider.context()),
        Outlet::Simple(Some("home".to_string()))
    );

    navigator.history().navigate_to(Docs, Doc { id: 4 });
    // not delivered yet
    assert_eq!(
        switch.render(&provider.context()),
        Outlet::Simple(Some("home".to_string()))
    );

    navigator.history().flush();
    assert_eq!(
        switch.render(&provider.context()),
        Outlet::Simple(Some("doc 4".to_string()))
    );
}

#[test]
fn simple_outlet_renders_nothing_without_a_match() {
    let navigator = navigator(OutletMode::Simple);
    let provider = navigator.provider();
    let switch = navigator.switch::<String>();
    let _routes = register(&switch);

    navigator.history().navigate_to(Settings, ());
    navigator.history().flush();
    assert_eq!(switch.render(&provider.context()), Outlet::Simple(None));

    navigator.history().go_back_by(2);
    navigator.history().flush();
    let outlet = switch.render(&provider.context());
    assert!(outlet.is_empty());
    assert_eq!(outlet.active(), None);
}

#[test]
fn stack_outlet_keeps_visited_routes() {
    let navigator = navigator(OutletMode::Stack);
    let provider = navigator.provider();
    let switch = navigator.switch::<String>();
    let _routes = register(&switch);
    let history = navigator.history();

    // nothing has been rendered yet
    assert_eq!(switch.render_location(None), Outlet::Stack(vec![]));

    assert_eq!(
        switch.render(&provider.context()),
        Outlet::Stack(vec![StackedView {
            path: "/",
            view: "home".to_string(),
            active: true,
        }])
    );

    history.navigate_to(Docs, Doc { id: 1 });
    history.flush();
    switch.render(&provider.context());

    history.replace_current(Docs, Doc { id: 2 }).unwrap();
    history.flush();
    let outlet = switch.render(&provider.context());
    assert_eq!(
        outlet,
        Outlet::Stack(vec![
            StackedView {
                path: "/",
                view: "home".to_string(),
                active: false,
            },
            StackedView {
                path: "/docs",
                view: "doc 2".to_string(),
                active: true,
            },
        ])
    );
    assert_eq!(outlet.into_active(), Some("doc 2".to_string()));

    history.go_back();
    history.flush();
    let outlet = switch.render(&provider.context());
    assert_eq!(outlet.active(), Some(&"home".to_string()));
    match outlet {
        Outlet::Stack(views) => {
            assert_eq!(views.len(), 2);
            assert_eq!(views[1].view, "doc 2");
            assert!(!views[1].active);
        }
        Outlet::Simple(_) => panic!("expected a stack outlet"),
    }
}

#[test]
fn components_can_register_routes_while_rendering() {
    use std::rc::Rc;

    let switch = Rc::new(Switch::<Paths, String>::new(OutletMode::Simple));

    let weak = Rc::downgrade(&switch);
    let _home = switch
        .register_route(Home, move |_| {
            if let Some(switch) = weak.upgrade() {
                // a nested route registration during render
                let _ = switch.register_route(Settings, |_| "settings".to_string());
            }
            "home".to_string()
        })
        .unwrap();

    let navigator = Navigator::<Paths>::with_initial(Home, ());
    let context = navigator.provider().context();
    assert_eq!(
        switch.render(&context),
        Outlet::Simple(Some("home".to_string()))
    );
    assert_eq!(switch.paths(), vec!["/", "/settings"]);
}
