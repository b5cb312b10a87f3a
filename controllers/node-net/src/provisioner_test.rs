//! Unit tests for the node provisioner

#[cfg(test)]
mod tests {
    use crate::error::ProvisionError;
    use crate::test_utils::*;
    use host_net::{HostOp, MockHostNet};
    use ovn_nb_client::MockNbClient;
    use ovn_nb_client::mock::SwitchPortRecord;
    use ovs_client::MockOvsClient;

    fn expected_host_ops(interface: &str) -> Vec<HostOp> {
        vec![
            HostOp::LinkSetUp(interface.to_string()),
            HostOp::AddrFlush(interface.to_string()),
            HostOp::AddrAdd {
                dev: interface.to_string(),
                cidr: "10.1.2.2/24".to_string(),
            },
            HostOp::RouteFlush("10.1.0.0/16".to_string()),
            HostOp::RouteAdd {
                subnet: "10.1.0.0/16".to_string(),
                via: "10.1.2.1".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn provisions_full_node_topology() {
        let nb = seeded_nb_client();
        let ovs = MockOvsClient::new();
        let host = MockHostNet::new();
        let provisioner = test_provisioner(nb.clone(), ovs.clone(), host.clone());

        provisioner
            .provision_node("node-a", "10.1.2.0/24", "10.1.0.0/16")
            .await
            .expect("provisioning succeeds");

        // Router port on the distributed router, first host address
        let router_port = nb.router_port("rtos-node-a").expect("router port created");
        assert_eq!(router_port.router, CLUSTER_ROUTER_UUID);
        assert_eq!(router_port.network, "10.1.2.1/24");

        // Switch carries subnet/gateway metadata and both load balancers
        let switch = nb.switch("node-a").expect("switch created");
        assert_eq!(switch.subnet, "10.1.2.0/24");
        assert_eq!(switch.gateway_ip, "10.1.2.1/24");
        assert_eq!(switch.load_balancers, vec![TCP_LB_UUID, UDP_LB_UUID]);

        // Router-facing port references the router port with its MAC
        match nb.switch_port("stor-node-a") {
            Some(SwitchPortRecord::RouterAttachment {
                switch,
                router_port: rp,
                mac,
            }) => {
                assert_eq!(switch, "node-a");
                assert_eq!(rp, "rtos-node-a");
                assert_eq!(mac, router_port.mac);
            }
            other => panic!("unexpected stor port: {other:?}"),
        }

        // Host-facing port carries the switch-assigned MAC and second address
        match nb.switch_port("mgt-node-a") {
            Some(SwitchPortRecord::Host { switch, addresses }) => {
                assert_eq!(switch, "node-a");
                assert_eq!(addresses, "0a:58:00:00:00:01 10.1.2.2");
            }
            other => panic!("unexpected management port: {other:?}"),
        }

        // Internal interface on the shared bridge, iface-id matching the port
        assert!(ovs.has_bridge("br-int"));
        let internal = ovs.port("mgt-node-a").expect("internal port created");
        assert_eq!(internal.bridge, "br-int");
        assert_eq!(internal.mtu, 1400);
        assert_eq!(internal.iface_id, "mgt-node-a");

        assert_eq!(host.ops(), expected_host_ops("mgt-node-a"));
    }

    #[tokio::test]
    async fn reprovisioning_converges_to_identical_state() {
        let nb = seeded_nb_client();
        let ovs = MockOvsClient::new();
        let host = MockHostNet::new();
        let provisioner = test_provisioner(nb.clone(), ovs.clone(), host.clone());

        provisioner
            .provision_node("node-a", "10.1.2.0/24", "10.1.0.0/16")
            .await
            .expect("first run succeeds");

        let router_port = nb.router_port("rtos-node-a").expect("router port created");
        let switch = nb.switch("node-a").expect("switch created");
        let mgmt_port = nb.switch_port("mgt-node-a");

        provisioner
            .provision_node("node-a", "10.1.2.0/24", "10.1.0.0/16")
            .await
            .expect("second run succeeds");

        // No new MAC generated, no attribute drift, no duplicate bindings
        assert_eq!(nb.router_port("rtos-node-a"), Some(router_port));
        assert_eq!(nb.switch("node-a"), Some(switch));
        assert_eq!(nb.switch_port("mgt-node-a"), mgmt_port);

        // Host convergence is re-issued in full on every run
        let mut twice = expected_host_ops("mgt-node-a");
        twice.extend(expected_host_ops("mgt-node-a"));
        assert_eq!(host.ops(), twice);
    }

    #[tokio::test]
    async fn reuses_existing_router_port_mac() {
        // No cluster router seeded: the lookup only happens when the router
        // port is absent, so reuse must not touch it.
        let nb = MockNbClient::new();
        nb.add_load_balancer(TCP_LB_UUID, "cluster-lb-tcp");
        nb.add_load_balancer(UDP_LB_UUID, "cluster-lb-udp");
        nb.add_router_port("rtos-node-a", CLUSTER_ROUTER_UUID, "02:b1:c2:d3:e4:f5", "10.1.2.1/24");

        let provisioner =
            test_provisioner(nb.clone(), MockOvsClient::new(), MockHostNet::new());
        provisioner
            .provision_node("node-a", "10.1.2.0/24", "10.1.0.0/16")
            .await
            .expect("provisioning succeeds");

        match nb.switch_port("stor-node-a") {
            Some(SwitchPortRecord::RouterAttachment { mac, .. }) => {
                assert_eq!(mac, "02:b1:c2:d3:e4:f5");
            }
            other => panic!("unexpected stor port: {other:?}"),
        }
    }

    #[tokio::test]
    async fn normalizes_node_name_to_lower_case() {
        let nb = seeded_nb_client();
        let ovs = MockOvsClient::new();
        let provisioner = test_provisioner(nb.clone(), ovs.clone(), MockHostNet::new());

        provisioner
            .provision_node("Node-A", "10.1.2.0/24", "10.1.0.0/16")
            .await
            .expect("provisioning succeeds");

        assert!(nb.switch("node-a").is_some());
        assert!(nb.switch("Node-A").is_none());
        assert!(ovs.port("mgt-node-a").is_some());
    }

    #[tokio::test]
    async fn truncates_interface_name_for_long_node_names() {
        let nb = seeded_nb_client();
        let ovs = MockOvsClient::new();
        let host = MockHostNet::new();
        let provisioner = test_provisioner(nb.clone(), ovs.clone(), host.clone());

        provisioner
            .provision_node("averyverylongnodename", "10.1.2.0/24", "10.1.0.0/16")
            .await
            .expect("provisioning succeeds");

        // Interface name bounded by the kernel limit; the logical port and
        // its iface-id keep the full node name.
        let internal = ovs.port("mgt-averyverylo").expect("internal port created");
        assert_eq!(internal.iface_id, "mgt-averyverylongnodename");
        assert!(nb.switch_port("mgt-averyverylongnodename").is_some());
        assert_eq!(host.ops()[0], HostOp::LinkSetUp("mgt-averyverylo".to_string()));
    }

    #[tokio::test]
    async fn fails_when_interface_reports_no_mac() {
        let nb = seeded_nb_client();
        let ovs = MockOvsClient::without_mac_assignment();
        let host = MockHostNet::new();
        let provisioner = test_provisioner(nb.clone(), ovs.clone(), host.clone());

        let err = provisioner
            .provision_node("node-a", "10.1.2.0/24", "10.1.0.0/16")
            .await
            .expect_err("must fail without a MAC");

        assert!(matches!(err, ProvisionError::InterfaceNotReady(ref name) if name == "mgt-node-a"));
        // Nothing past the MAC read ran
        assert!(nb.switch_port("mgt-node-a").is_none());
        assert!(host.ops().is_empty());
        assert!(nb.load_balancer_lookups().is_empty());
    }

    #[tokio::test]
    async fn fails_when_tcp_load_balancer_is_missing() {
        let nb = MockNbClient::new();
        nb.set_cluster_router(CLUSTER_ROUTER_UUID);
        nb.add_load_balancer(UDP_LB_UUID, "cluster-lb-udp");

        let host = MockHostNet::new();
        let provisioner = test_provisioner(nb.clone(), MockOvsClient::new(), host.clone());

        let err = provisioner
            .provision_node("node-a", "10.1.2.0/24", "10.1.0.0/16")
            .await
            .expect_err("must fail without the TCP load balancer");

        assert!(matches!(err, ProvisionError::LoadBalancerNotFound("TCP")));
        // The UDP lookup is never attempted
        assert_eq!(nb.load_balancer_lookups(), vec!["cluster-lb-tcp"]);
        // Host configuration had already converged before the lookup
        assert_eq!(host.ops(), expected_host_ops("mgt-node-a"));
        let switch = nb.switch("node-a").expect("switch created");
        assert!(switch.load_balancers.is_empty());
    }

    #[tokio::test]
    async fn fails_when_udp_load_balancer_is_missing() {
        let nb = MockNbClient::new();
        nb.set_cluster_router(CLUSTER_ROUTER_UUID);
        nb.add_load_balancer(TCP_LB_UUID, "cluster-lb-tcp");

        let provisioner =
            test_provisioner(nb.clone(), MockOvsClient::new(), MockHostNet::new());

        let err = provisioner
            .provision_node("node-a", "10.1.2.0/24", "10.1.0.0/16")
            .await
            .expect_err("must fail without the UDP load balancer");

        assert!(matches!(err, ProvisionError::LoadBalancerNotFound("UDP")));
        // Both lookups ran, and the TCP binding had already been applied
        assert_eq!(
            nb.load_balancer_lookups(),
            vec!["cluster-lb-tcp", "cluster-lb-udp"]
        );
        let switch = nb.switch("node-a").expect("switch created");
        assert_eq!(switch.load_balancers, vec![TCP_LB_UUID]);
    }

    #[tokio::test]
    async fn rejects_malformed_local_subnet_before_any_mutation() {
        let nb = seeded_nb_client();
        let host = MockHostNet::new();
        let provisioner = test_provisioner(nb.clone(), MockOvsClient::new(), host.clone());

        let err = provisioner
            .provision_node("node-a", "10.1.2.0/99", "10.1.0.0/16")
            .await
            .expect_err("must fail on bad subnet");

        assert!(matches!(err, ProvisionError::InvalidSubnet { .. }));
        assert!(nb.switch("node-a").is_none());
        assert!(nb.router_port("rtos-node-a").is_none());
        assert!(host.ops().is_empty());
    }

    #[tokio::test]
    async fn host_failure_aborts_before_load_balancer_binding() {
        let nb = seeded_nb_client();
        let host = MockHostNet::new();
        host.fail_on(HostOp::RouteAdd {
            subnet: "10.1.0.0/16".to_string(),
            via: "10.1.2.1".to_string(),
        });
        let provisioner = test_provisioner(nb.clone(), MockOvsClient::new(), host.clone());

        let err = provisioner
            .provision_node("node-a", "10.1.2.0/24", "10.1.0.0/16")
            .await
            .expect_err("must fail on host config");

        assert!(matches!(err, ProvisionError::HostConfig(_)));
        assert!(nb.load_balancer_lookups().is_empty());
        let switch = nb.switch("node-a").expect("switch created");
        assert!(switch.load_balancers.is_empty());
    }
}
